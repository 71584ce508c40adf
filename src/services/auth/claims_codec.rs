//! 클레임 서명/검증 코덱
//!
//! HS256 JWS 압축 직렬화(`header.payload.signature`)로 [`Claims`]를 인코딩하고
//! 디코딩합니다. 서명 비교는 `jsonwebtoken`의 HMAC 검증을 통해 상수 시간으로 수행됩니다.

use std::collections::HashSet;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::models::token::Claims;
use crate::errors::AuthError;

/// 토큰 세그먼트 수 (header, payload, signature)
const TOKEN_SEGMENTS: usize = 3;

/// HMAC-SHA256 클레임 코덱
///
/// 서명 키는 생성 시 한 번만 만들어지며 이후 읽기 전용으로 공유됩니다.
#[derive(Clone)]
pub struct ClaimsCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl ClaimsCodec {
    /// 공유 비밀키로 코덱을 생성합니다.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 주입된 시각으로 직접 검사한다.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["sub".to_string(), "exp".to_string()]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// 클레임을 서명된 토큰 문자열로 인코딩합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InternalEncodingFailure` - 직렬화 또는 서명 실패
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::InternalEncodingFailure(e.to_string()))
    }

    /// 토큰을 검증하고 클레임을 디코딩합니다.
    ///
    /// 검사 순서: 세그먼트 구조 → base64url → 헤더 알고리즘 → 서명 → 필수 클레임 → 만료.
    ///
    /// # Errors
    ///
    /// * `AuthError::MalformedToken` - 세그먼트 수 불일치, base64url/JSON 오류,
    ///   HS256 이외의 알고리즘(`none` 포함), 필수 클레임 누락
    /// * `AuthError::BadSignature` - 서명 불일치
    /// * `AuthError::Expired` - `exp`가 `now`보다 과거
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != TOKEN_SEGMENTS {
            return Err(AuthError::MalformedToken);
        }
        // jsonwebtoken은 페이로드를 디코딩하기 전에 서명을 비교한다.
        if segments.iter().any(|segment| URL_SAFE_NO_PAD.decode(segment).is_err()) {
            return Err(AuthError::MalformedToken);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::BadSignature,
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => {
                    log::debug!("토큰 구조 오류: {}", e);
                    AuthError::MalformedToken
                }
            })?;

        if claims.is_expired_at(now) {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::{Duration, TimeZone};
    use crate::domain::models::auth::Principal;

    const SECRET: &[u8] = b"test-signing-secret";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn sample_claims() -> Claims {
        let principal = Principal::new(1, "A", "B");
        Claims::access(&principal, "example.com", "example.com", t0(), t0() + Duration::minutes(15))
    }

    fn replace_header(token: &str, header_json: &str) -> String {
        let (_, rest) = token.split_once('.').unwrap();
        format!("{}.{}", URL_SAFE_NO_PAD.encode(header_json), rest)
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let codec = ClaimsCodec::new(SECRET);
        let claims = sample_claims();

        let token = codec.encode(&claims).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded = codec.decode(&token, t0()).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = ClaimsCodec::new(SECRET);
        let claims = sample_claims();

        assert_eq!(codec.encode(&claims).unwrap(), codec.encode(&claims).unwrap());
    }

    #[test]
    fn test_wrong_segment_count_is_malformed() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();

        assert_eq!(codec.decode("abc.def", t0()), Err(AuthError::MalformedToken));
        assert_eq!(codec.decode(&format!("{}.extra", token), t0()), Err(AuthError::MalformedToken));
        assert_eq!(codec.decode("", t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        let codec = ClaimsCodec::new(SECRET);
        assert_eq!(codec.decode("!!!.@@@.###", t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_non_base64_signature_is_malformed() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();
        let (message, _) = token.rsplit_once('.').unwrap();

        let forged = format!("{}.@@@!!", message);
        assert_eq!(codec.decode(&forged, t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_non_base64_payload_is_malformed() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged = format!("{}.***.{}", parts[0], parts[2]);
        assert_eq!(codec.decode(&forged, t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_every_signature_bit_flip_is_bad_signature() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();
        let (message, signature) = token.rsplit_once('.').unwrap();
        let signature = URL_SAFE_NO_PAD.decode(signature).unwrap();

        for byte in 0..signature.len() {
            for bit in 0..8 {
                let mut tampered = signature.clone();
                tampered[byte] ^= 1 << bit;
                let forged = format!("{}.{}", message, URL_SAFE_NO_PAD.encode(&tampered));

                assert_eq!(codec.decode(&forged, t0()), Err(AuthError::BadSignature));
            }
        }
    }

    #[test]
    fn test_tampered_payload_is_bad_signature() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();

        let mut forged_claims = sample_claims();
        forged_claims.sub = "2".to_string();
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());

        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], payload, parts[2]);

        assert_eq!(codec.decode(&forged, t0()), Err(AuthError::BadSignature));
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let token = ClaimsCodec::new(SECRET).encode(&sample_claims()).unwrap();
        let other = ClaimsCodec::new(b"another-secret");

        assert_eq!(other.decode(&token, t0()), Err(AuthError::BadSignature));
    }

    #[test]
    fn test_none_algorithm_is_rejected() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();
        let forged = replace_header(&token, r#"{"alg":"none","typ":"JWT"}"#);

        assert_eq!(codec.decode(&forged, t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_other_hmac_algorithm_is_rejected_before_signature_check() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();
        let forged = replace_header(&token, r#"{"alg":"HS384","typ":"JWT"}"#);

        assert_eq!(codec.decode(&forged, t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_expired_token() {
        let codec = ClaimsCodec::new(SECRET);
        let token = codec.encode(&sample_claims()).unwrap();

        assert!(codec.decode(&token, t0() + Duration::minutes(15) - Duration::seconds(1)).is_ok());
        assert_eq!(codec.decode(&token, t0() + Duration::minutes(15)), Err(AuthError::Expired));
        assert_eq!(
            codec.decode(&token, t0() + Duration::minutes(15) + Duration::seconds(1)),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn test_signature_is_checked_before_expiry() {
        let token = ClaimsCodec::new(SECRET).encode(&sample_claims()).unwrap();
        let other = ClaimsCodec::new(b"another-secret");

        assert_eq!(
            other.decode(&token, t0() + Duration::days(30)),
            Err(AuthError::BadSignature)
        );
    }

    #[test]
    fn test_missing_subject_is_malformed() {
        #[derive(serde::Serialize)]
        struct Partial {
            iat: i64,
            exp: i64,
        }

        let codec = ClaimsCodec::new(SECRET);
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &Partial { iat: t0().timestamp(), exp: (t0() + Duration::minutes(5)).timestamp() },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(codec.decode(&token, t0()), Err(AuthError::MalformedToken));
    }
}
