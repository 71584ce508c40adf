//! 인증 게이트
//!
//! 보호된 라우트의 액세스 토큰 확인과 로그인/리프레시/로그아웃 흐름을 한곳에 모읍니다.
//! 하위 컴포넌트(코덱, 발급기, 검증기, 쿠키 관리자)는 응답을 직접 쓰지 않으며,
//! 실패는 [`AuthError`] 값으로만 전달됩니다.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::HttpRequest;
use chrono::{DateTime, Utc};

use crate::config::AuthConfig;
use crate::domain::models::auth::Principal;
use crate::domain::models::token::{Claims, TokenPair};
use crate::errors::AuthError;
use crate::repositories::users::PrincipalLookup;
use crate::services::auth::{ClaimsCodec, RefreshCookieManager, TokenIssuer, TokenVerifier, VerifyMode};

/// Authorization 헤더의 인증 스킴
const BEARER_SCHEME: &str = "Bearer";

/// 로그인 또는 리프레시로 새로 발급된 세션
///
/// 본문으로 내려갈 토큰 쌍과 리프레시 토큰을 담은 Set-Cookie를 함께 가집니다.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub tokens: TokenPair,
    pub cookie: Cookie<'static>,
}

/// 인증 게이트
///
/// 애플리케이션 시작 시 한 번 만들어 `web::Data`로 공유합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let gate = AuthGate::new(Arc::new(AuthConfig::from_env()?), Arc::new(user_repository));
///
/// let claims = gate.require_access(req.headers(), Utc::now())?;
/// let session = gate.refresh(&req, Utc::now()).await?;
/// ```
#[derive(Clone)]
pub struct AuthGate {
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    cookies: RefreshCookieManager,
    principals: Arc<dyn PrincipalLookup>,
}

impl AuthGate {
    pub fn new(config: Arc<AuthConfig>, principals: Arc<dyn PrincipalLookup>) -> Self {
        let codec = Arc::new(ClaimsCodec::new(config.signing_secret()));

        Self {
            issuer: TokenIssuer::new(config.clone(), codec.clone()),
            verifier: TokenVerifier::new(config.clone(), codec),
            cookies: RefreshCookieManager::new(config),
            principals,
        }
    }

    /// 자격 증명 확인에 사용하는 인증 주체 저장소
    pub fn principals(&self) -> &dyn PrincipalLookup {
        self.principals.as_ref()
    }

    /// Authorization 헤더 값에서 Bearer 토큰 추출
    ///
    /// 값은 공백 하나로 나뉜 정확히 두 부분이어야 하며 첫 부분은 대소문자까지 `Bearer`여야 합니다.
    pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
        let header = header.ok_or(AuthError::MalformedHeader)?;
        let parts: Vec<&str> = header.split(' ').collect();

        match parts.as_slice() {
            [scheme, token] if *scheme == BEARER_SCHEME && !token.is_empty() => Ok(token),
            _ => Err(AuthError::MalformedHeader),
        }
    }

    /// 보호된 라우트의 액세스 토큰 확인
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedHeader` - 헤더 누락, 비가시 ASCII, 형식 오류
    /// * 그 외 [`TokenVerifier::verify`]의 `Strict` 모드 실패 원인
    pub fn require_access(&self, headers: &HeaderMap, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let header = match headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
            None => None,
        };
        let token = Self::extract_bearer_token(header)?;

        self.verifier.verify(token, now, VerifyMode::Strict)
    }

    /// 인증된 주체에게 새 세션 발급
    pub fn login(&self, principal: &Principal, now: DateTime<Utc>) -> Result<IssuedSession, AuthError> {
        let tokens = self.issuer.generate_pair(principal, now)?;
        let cookie = self.cookies.build_set_cookie(&tokens.refresh_token, now);

        log::info!("로그인 세션 발급 - user_id: {}", principal.id);

        Ok(IssuedSession { tokens, cookie })
    }

    /// 리프레시 쿠키로 세션 갱신
    ///
    /// 실패 시 기존 쿠키는 그대로 두며 새 쿠키를 쓰지 않습니다.
    /// 인증 주체 조회는 한 번만 호출하고 재시도하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::MissingRefreshCookie` - 리프레시 쿠키 없음
    /// * `AuthError::UnknownUser` - `sub`가 정수가 아니거나, 사용자가 없거나, 조회 실패
    /// * 그 외 [`TokenVerifier::verify`]의 `RefreshOnly` 모드 실패 원인
    pub async fn refresh(&self, req: &HttpRequest, now: DateTime<Utc>) -> Result<IssuedSession, AuthError> {
        let cookie = req
            .cookie(self.cookies.cookie_name())
            .ok_or(AuthError::MissingRefreshCookie)?;

        let claims = self
            .verifier
            .verify(cookie.value(), now, VerifyMode::RefreshOnly)
            .inspect_err(|e| log::warn!("리프레시 토큰 거부: {}", e))?;

        let user_id: i64 = claims.sub.parse().map_err(|_| {
            log::warn!("리프레시 토큰의 sub가 정수가 아님");
            AuthError::UnknownUser
        })?;

        let principal = match self.principals.find_principal_by_id(user_id).await {
            Ok(Some(principal)) => principal,
            Ok(None) => {
                log::warn!("리프레시 대상 사용자 없음 - user_id: {}", user_id);
                return Err(AuthError::UnknownUser);
            }
            Err(e) => {
                log::warn!("리프레시 사용자 조회 실패 - user_id: {}, 에러: {}", user_id, e);
                return Err(AuthError::UnknownUser);
            }
        };

        let tokens = self.issuer.generate_pair(&principal, now)?;
        let cookie = self.cookies.build_set_cookie(&tokens.refresh_token, now);

        log::debug!("리프레시 토큰 회전 - user_id: {}", user_id);

        Ok(IssuedSession { tokens, cookie })
    }

    /// 리프레시 쿠키를 지우는 쿠키. 상태와 무관하게 항상 같은 값입니다.
    pub fn logout(&self) -> Cookie<'static> {
        self.cookies.build_clear_cookie()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;
    use actix_web::test::TestRequest;
    use chrono::Duration;
    use crate::services::auth::test_support::{gate_with, t0, test_config, FailingPrincipals, InMemoryPrincipals};

    fn gate() -> AuthGate {
        gate_with(InMemoryPrincipals::new(vec![(Principal::new(1, "A", "B"), "a@example.com", "secret")]))
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token)).unwrap());
        headers
    }

    fn refresh_request(token: &str) -> HttpRequest {
        TestRequest::get()
            .uri("/refresh")
            .cookie(Cookie::new("refresh_token", token.to_string()))
            .to_http_request()
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(AuthGate::extract_bearer_token(Some("Bearer abc")), Ok("abc"));

        for header in ["Basic x", "Bearer", "Bearer ", "Bearer  x", "bearer x", "Bearer x y", ""] {
            assert_eq!(
                AuthGate::extract_bearer_token(Some(header)),
                Err(AuthError::MalformedHeader),
                "header: {:?}",
                header
            );
        }
        assert_eq!(AuthGate::extract_bearer_token(None), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn test_require_access_accepts_issued_token() {
        let gate = gate();
        let session = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();

        let claims = gate.require_access(&bearer(&session.tokens.access_token), t0()).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.name.as_deref(), Some("A B"));
    }

    #[test]
    fn test_require_access_rejections() {
        let gate = gate();
        let session = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();

        assert_eq!(gate.require_access(&HeaderMap::new(), t0()), Err(AuthError::MalformedHeader));

        let mut non_visible = HeaderMap::new();
        non_visible.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap());
        assert_eq!(gate.require_access(&non_visible, t0()), Err(AuthError::MalformedHeader));

        assert_eq!(
            gate.require_access(&bearer(&session.tokens.access_token), t0() + Duration::minutes(16)),
            Err(AuthError::Expired)
        );
        assert_eq!(
            gate.require_access(&bearer(&session.tokens.refresh_token), t0()),
            Err(AuthError::IssuerMismatch)
        );
        assert_eq!(gate.require_access(&bearer("not-a-token"), t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_login_sets_refresh_cookie() {
        let gate = gate();
        let session = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();

        assert_eq!(session.cookie.name(), "refresh_token");
        assert_eq!(session.cookie.value(), session.tokens.refresh_token);
    }

    #[actix_web::test]
    async fn test_refresh_rotation() {
        let gate = gate();
        let login = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();

        let later = t0() + Duration::hours(1);
        let refreshed = gate.refresh(&refresh_request(&login.tokens.refresh_token), later).await.unwrap();

        assert_ne!(refreshed.tokens.refresh_token, login.tokens.refresh_token);
        assert_eq!(refreshed.cookie.value(), refreshed.tokens.refresh_token);

        let claims = gate.require_access(&bearer(&refreshed.tokens.access_token), later).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.exp, (later + Duration::minutes(15)).timestamp());
    }

    #[actix_web::test]
    async fn test_refresh_without_cookie() {
        let req = TestRequest::get().uri("/refresh").to_http_request();
        assert_eq!(gate().refresh(&req, t0()).await.unwrap_err(), AuthError::MissingRefreshCookie);
    }

    #[actix_web::test]
    async fn test_refresh_with_expired_cookie() {
        let gate = gate();
        let login = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();

        let result = gate
            .refresh(&refresh_request(&login.tokens.refresh_token), t0() + Duration::hours(25))
            .await;
        assert_eq!(result.unwrap_err(), AuthError::Expired);
    }

    #[actix_web::test]
    async fn test_refresh_with_forged_cookie() {
        let gate = gate();
        let login = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();
        let forged = format!("{}x", login.tokens.refresh_token);

        let result = gate.refresh(&refresh_request(&forged), t0()).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_refresh_for_unknown_user() {
        let issuing_gate = gate_with(InMemoryPrincipals::new(vec![]));
        let login = issuing_gate.login(&Principal::new(77, "Ghost", "User"), t0()).unwrap();

        let result = issuing_gate.refresh(&refresh_request(&login.tokens.refresh_token), t0()).await;
        assert_eq!(result.unwrap_err(), AuthError::UnknownUser);
    }

    #[actix_web::test]
    async fn test_refresh_when_lookup_fails() {
        let gate = gate_with(FailingPrincipals);
        let login = gate.login(&Principal::new(1, "A", "B"), t0()).unwrap();

        let result = gate.refresh(&refresh_request(&login.tokens.refresh_token), t0()).await;
        assert_eq!(result.unwrap_err(), AuthError::UnknownUser);
    }

    #[actix_web::test]
    async fn test_refresh_with_non_numeric_subject() {
        let config = test_config();
        let codec = ClaimsCodec::new(config.signing_secret());
        let claims = Claims {
            sub: "not-a-number".to_string(),
            iss: None,
            aud: None,
            iat: t0().timestamp(),
            exp: (t0() + Duration::hours(1)).timestamp(),
            name: None,
            typ: None,
        };
        let token = codec.encode(&claims).unwrap();

        let result = gate().refresh(&refresh_request(&token), t0()).await;
        assert_eq!(result.unwrap_err(), AuthError::UnknownUser);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let gate = gate();
        let first = gate.logout();
        let second = gate.logout();

        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.value(), "");
    }
}
