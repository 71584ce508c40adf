//! # Authentication Configuration Module
//!
//! JWT 발급/검증과 리프레시 쿠키에 필요한 설정을 관리하는 모듈입니다.
//! 설정은 프로세스 시작 시 한 번 생성되고 이후 변경되지 않으며,
//! `Arc`/`web::Data`를 통해 모든 요청 핸들러가 잠금 없이 공유합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ISSUER="example.com"
//! export JWT_AUDIENCE="example.com"
//! export JWT_ACCESS_TTL_MINUTES="15"
//! export JWT_REFRESH_TTL_HOURS="24"
//! export REFRESH_COOKIE_NAME="refresh_token"
//! export REFRESH_COOKIE_PATH="/"
//! export COOKIE_DOMAIN="localhost"
//! ```
//!
//! 리프레시 쿠키에는 항상 `Domain` 속성이 붙습니다. 브라우저는 `Domain`이 있는
//! `__Host-` 접두사 쿠키를 저장하지 않으므로 `REFRESH_COOKIE_NAME`에 이 접두사를 쓰지 마세요.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::AuthConfig;
//!
//! let config = Arc::new(AuthConfig::from_env()?);
//! println!("issuer = {}", config.issuer());
//! ```

use std::env;
use std::fmt;

use chrono::Duration;

use crate::config::Environment;
use crate::errors::AppError;

const DEFAULT_ISSUER: &str = "example.com";
const DEFAULT_AUDIENCE: &str = "example.com";
const DEFAULT_DEV_SECRET: &str = "verysecret";
const DEFAULT_ACCESS_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TTL_HOURS: i64 = 24;
const DEFAULT_COOKIE_NAME: &str = "refresh_token";
const DEFAULT_COOKIE_PATH: &str = "/";
const DEFAULT_COOKIE_DOMAIN: &str = "localhost";

/// 인증 코어 설정
///
/// 액세스 토큰 TTL은 리프레시 토큰 TTL보다 길 수 없습니다.
/// 생성자에서 이 불변식을 검증하므로 생성된 값은 항상 유효합니다.
///
/// ## 권장 설정값
///
/// - **액세스 토큰**: 15분
/// - **리프레시 토큰**: 24시간
#[derive(Clone)]
pub struct AuthConfig {
    issuer: String,
    audience: String,
    signing_secret: Vec<u8>,
    access_ttl: Duration,
    refresh_ttl: Duration,
    cookie_name: String,
    cookie_path: String,
    cookie_domain: String,
}

impl AuthConfig {
    /// 새 인증 설정을 생성합니다.
    ///
    /// 쿠키 속성은 기본값(`refresh_token`, `/`, `localhost`)으로 시작하며
    /// [`AuthConfig::with_cookie`]로 변경할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 빈 비밀키, 0 이하의 TTL,
    ///   또는 액세스 TTL이 리프레시 TTL보다 긴 경우
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        signing_secret: impl Into<Vec<u8>>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Result<Self, AppError> {
        let signing_secret = signing_secret.into();

        if signing_secret.is_empty() {
            return Err(AppError::ConfigError("JWT 서명 비밀키가 비어 있습니다".to_string()));
        }
        if access_ttl <= Duration::zero() || refresh_ttl <= Duration::zero() {
            return Err(AppError::ConfigError("토큰 TTL은 0보다 커야 합니다".to_string()));
        }
        if access_ttl > refresh_ttl {
            return Err(AppError::ConfigError(format!(
                "액세스 토큰 TTL({}초)이 리프레시 토큰 TTL({}초)보다 깁니다",
                access_ttl.num_seconds(),
                refresh_ttl.num_seconds()
            )));
        }

        Ok(Self {
            issuer: issuer.into(),
            audience: audience.into(),
            signing_secret,
            access_ttl,
            refresh_ttl,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
            cookie_domain: DEFAULT_COOKIE_DOMAIN.to_string(),
        })
    }

    /// 리프레시 쿠키의 이름, 경로, 도메인을 지정합니다.
    pub fn with_cookie(
        mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        self.cookie_name = name.into();
        self.cookie_path = path.into();
        self.cookie_domain = domain.into();
        self
    }

    /// 현재 실행 환경을 기준으로 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_for(&Environment::current())
    }

    /// 주어진 실행 환경을 기준으로 환경 변수에서 설정을 읽어옵니다.
    ///
    /// `JWT_SECRET`이 없으면 개발용 기본값을 사용하지만,
    /// 운영 환경에서는 시작을 거부합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 운영 환경에서 비밀키 누락 또는 TTL 불변식 위반
    pub fn from_env_for(environment: &Environment) -> Result<Self, AppError> {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if *environment == Environment::Production => {
                return Err(AppError::ConfigError(
                    "운영 환경에서는 JWT_SECRET 설정이 필요합니다".to_string(),
                ));
            }
            Err(_) => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEFAULT_DEV_SECRET.to_string()
            }
        };

        let access_ttl = Duration::minutes(read_i64("JWT_ACCESS_TTL_MINUTES", DEFAULT_ACCESS_TTL_MINUTES));
        let refresh_ttl = Duration::hours(read_i64("JWT_REFRESH_TTL_HOURS", DEFAULT_REFRESH_TTL_HOURS));

        let config = Self::new(
            read_string("JWT_ISSUER", DEFAULT_ISSUER),
            read_string("JWT_AUDIENCE", DEFAULT_AUDIENCE),
            secret.into_bytes(),
            access_ttl,
            refresh_ttl,
        )?
        .with_cookie(
            read_string("REFRESH_COOKIE_NAME", DEFAULT_COOKIE_NAME),
            read_string("REFRESH_COOKIE_PATH", DEFAULT_COOKIE_PATH),
            read_string("COOKIE_DOMAIN", DEFAULT_COOKIE_DOMAIN),
        );

        log::info!("인증 설정 로드됨: {:?}", config);
        Ok(config)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// HMAC-SHA256 서명 비밀키
    pub fn signing_secret(&self) -> &[u8] {
        &self.signing_secret
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn cookie_path(&self) -> &str {
        &self.cookie_path
    }

    pub fn cookie_domain(&self) -> &str {
        &self.cookie_domain
    }
}

// 비밀키는 로그에 남기지 않습니다.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("signing_secret", &"<redacted>")
            .field("access_ttl_secs", &self.access_ttl.num_seconds())
            .field("refresh_ttl_secs", &self.refresh_ttl.num_seconds())
            .field("cookie_name", &self.cookie_name)
            .field("cookie_path", &self.cookie_path)
            .field("cookie_domain", &self.cookie_domain)
            .finish()
    }
}

fn read_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn read_i64(key: &str, default: i64) -> i64 {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
