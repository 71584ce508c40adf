//! 토큰 쌍 발급
//!
//! 인증 주체와 주입된 현재 시각으로부터 액세스/리프레시 토큰 쌍을 만듭니다.
//! 벽시계를 직접 읽지 않으므로 같은 입력에는 항상 같은 토큰이 나옵니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AuthConfig;
use crate::domain::models::auth::Principal;
use crate::domain::models::token::{Claims, TokenPair};
use crate::errors::AuthError;
use crate::services::auth::ClaimsCodec;

/// 액세스/리프레시 토큰 발급기
#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<AuthConfig>,
    codec: Arc<ClaimsCodec>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>, codec: Arc<ClaimsCodec>) -> Self {
        Self { config, codec }
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// # Arguments
    ///
    /// * `principal` - 토큰을 발급받을 사용자
    /// * `now` - 발급 시각 (`iat`), 두 토큰이 공유합니다
    ///
    /// # Errors
    ///
    /// * `AuthError::InternalEncodingFailure` - 서명 실패. 요청 단위로 치명적이며 재시도하지 않습니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = issuer.generate_pair(&principal, Utc::now())?;
    /// println!("Access token: {}", pair.access_token);
    /// ```
    pub fn generate_pair(&self, principal: &Principal, now: DateTime<Utc>) -> Result<TokenPair, AuthError> {
        let access_claims = Claims::access(
            principal,
            self.config.issuer(),
            self.config.audience(),
            now,
            now + self.config.access_ttl(),
        );
        let refresh_claims = Claims::refresh(principal, now, now + self.config.refresh_ttl());

        let access_token = self.codec.encode(&access_claims).inspect_err(|e| {
            log::error!("액세스 토큰 생성 실패 - user_id: {}, 에러: {}", principal.id, e);
        })?;
        let refresh_token = self.codec.encode(&refresh_claims).inspect_err(|e| {
            log::error!("리프레시 토큰 생성 실패 - user_id: {}, 에러: {}", principal.id, e);
        })?;

        log::debug!("토큰 쌍 발급 - user_id: {}", principal.id);

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::services::auth::test_support::{t0, test_config};

    fn issuer() -> (TokenIssuer, Arc<ClaimsCodec>) {
        let config = Arc::new(test_config());
        let codec = Arc::new(ClaimsCodec::new(config.signing_secret()));
        (TokenIssuer::new(config, codec.clone()), codec)
    }

    #[test]
    fn test_access_claims() {
        let (issuer, codec) = issuer();
        let principal = Principal::new(1, "A", "B");

        let pair = issuer.generate_pair(&principal, t0()).unwrap();
        let claims = codec.decode(&pair.access_token, t0()).unwrap();

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.iss.as_deref(), Some("example.com"));
        assert_eq!(claims.aud.as_deref(), Some("example.com"));
        assert_eq!(claims.name.as_deref(), Some("A B"));
        assert_eq!(claims.typ.as_deref(), Some("access"));
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, (t0() + Duration::minutes(15)).timestamp());
    }

    #[test]
    fn test_refresh_claims_are_minimal() {
        let (issuer, codec) = issuer();
        let principal = Principal::new(1, "A", "B");

        let pair = issuer.generate_pair(&principal, t0()).unwrap();
        let claims = codec.decode(&pair.refresh_token, t0()).unwrap();

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, (t0() + Duration::hours(24)).timestamp());
        assert!(claims.iss.is_none());
        assert!(claims.aud.is_none());
        assert!(claims.name.is_none());
        assert!(claims.typ.is_none());
    }

    #[test]
    fn test_pair_shares_subject_and_issue_time() {
        let (issuer, codec) = issuer();
        let pair = issuer.generate_pair(&Principal::new(9, "X", "Y"), t0()).unwrap();

        let access = codec.decode(&pair.access_token, t0()).unwrap();
        let refresh = codec.decode(&pair.refresh_token, t0()).unwrap();

        assert_eq!(access.sub, refresh.sub);
        assert_eq!(access.iat, refresh.iat);
        assert!(access.exp <= refresh.exp);
    }

    #[test]
    fn test_generation_is_pure_over_inputs() {
        let (issuer, _) = issuer();
        let principal = Principal::new(3, "C", "D");

        let first = issuer.generate_pair(&principal, t0()).unwrap();
        let second = issuer.generate_pair(&principal, t0()).unwrap();
        let later = issuer.generate_pair(&principal, t0() + Duration::seconds(1)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first.refresh_token, later.refresh_token);
    }
}
