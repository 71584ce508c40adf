//! 리프레시 토큰 쿠키 생성
//!
//! 리프레시 토큰을 담는 쿠키와 이를 삭제하는 쿠키를 만듭니다.
//! `SameSite=Strict`, `HttpOnly`, `Secure`는 설정이 아닌 고정 속성입니다.

use std::sync::Arc;

use actix_web::cookie::time::{Duration as CookieDuration, OffsetDateTime};
use actix_web::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};

use crate::config::AuthConfig;

/// 리프레시 쿠키 관리자
#[derive(Clone)]
pub struct RefreshCookieManager {
    config: Arc<AuthConfig>,
}

impl RefreshCookieManager {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn cookie_name(&self) -> &str {
        self.config.cookie_name()
    }

    /// 리프레시 토큰을 담는 쿠키를 생성합니다.
    ///
    /// `Expires`는 `now + refresh_ttl`, `Max-Age`는 `refresh_ttl`(초)입니다.
    pub fn build_set_cookie(&self, refresh_token: &str, now: DateTime<Utc>) -> Cookie<'static> {
        let refresh_ttl = self.config.refresh_ttl();
        let expires_at = (now + refresh_ttl).timestamp();

        let mut cookie = self.base_cookie(refresh_token.to_string());
        cookie.set_expires(
            OffsetDateTime::from_unix_timestamp(expires_at).unwrap_or(OffsetDateTime::UNIX_EPOCH),
        );
        cookie.set_max_age(CookieDuration::seconds(refresh_ttl.num_seconds()));
        cookie
    }

    /// 리프레시 쿠키를 삭제하는 쿠키를 생성합니다.
    ///
    /// 값은 비어 있고 `Expires`는 Unix epoch, `Max-Age`는 -1입니다.
    pub fn build_clear_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base_cookie(String::new());
        cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
        cookie.set_max_age(CookieDuration::seconds(-1));
        cookie
    }

    fn base_cookie(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.config.cookie_name().to_string(), value);
        cookie.set_path(self.config.cookie_path().to_string());
        cookie.set_domain(self.config.cookie_domain().to_string());
        cookie.set_same_site(SameSite::Strict);
        cookie.set_http_only(true);
        cookie.set_secure(true);
        cookie
    }
}
