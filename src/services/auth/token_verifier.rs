//! 토큰 검증
//!
//! 제시된 토큰의 서명, 발급자, 만료를 확인하여 검증된 클레임 또는
//! 구체적인 실패 원인을 돌려줍니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AuthConfig;
use crate::domain::models::token::Claims;
use crate::errors::AuthError;
use crate::services::auth::ClaimsCodec;

/// 검증 결과. 실패 원인은 `Expired`와 `BadSignature`를 포함해 끝까지 구분됩니다.
pub type VerificationOutcome = Result<Claims, AuthError>;

/// 검증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMode {
    /// 보호된 라우트의 액세스 토큰: 서명, 만료, 발급자 검사
    Strict,
    /// 리프레시 쿠키: 서명과 만료만 검사 (리프레시 클레임에는 발급자가 없음)
    RefreshOnly,
}

/// 토큰 검증기
#[derive(Clone)]
pub struct TokenVerifier {
    config: Arc<AuthConfig>,
    codec: Arc<ClaimsCodec>,
}

impl TokenVerifier {
    pub fn new(config: Arc<AuthConfig>, codec: Arc<ClaimsCodec>) -> Self {
        Self { config, codec }
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 토큰 문자열 (Bearer 접두사 제외)
    /// * `now` - 만료 판단 기준 시각
    /// * `mode` - [`VerifyMode`]
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedToken` / `BadSignature` / `Expired` - 디코딩 실패
    /// * `AuthError::IssuerMismatch` - `Strict` 모드에서 `iss`가 설정과 다름
    pub fn verify(&self, token: &str, now: DateTime<Utc>, mode: VerifyMode) -> VerificationOutcome {
        let claims = self.codec.decode(token, now)?;

        if mode == VerifyMode::Strict && claims.iss.as_deref() != Some(self.config.issuer()) {
            return Err(AuthError::IssuerMismatch);
        }

        Ok(claims)
    }
}
