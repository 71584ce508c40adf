//! JWT 인증 토큰 클레임 및 페어링 된 세트
//!
//! RFC 7519 JWT 등록 클레임과 애플리케이션 클레임을 명시적인 구조체로 표현하고,
//! 액세스/리프레시 두 용도의 토큰을 한 쌍으로 묶습니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::auth::Principal;

/// 액세스 토큰의 `typ` 클레임 값
pub const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT 토큰의 클레임(Payload) 구조체
///
/// `sub`, `iat`, `exp`는 디코딩 시 반드시 존재해야 하며, 나머지는 선택입니다.
/// 값이 없는 선택 클레임은 직렬화되지 않습니다.
///
/// ## 클레임 구성
///
/// | 클레임 | 액세스 토큰 | 리프레시 토큰 |
/// |--------|-------------|---------------|
/// | `sub`  | 사용자 ID | 사용자 ID |
/// | `iss`  | 발급자 | - |
/// | `aud`  | 대상 | - |
/// | `iat`  | 발급 시각 | 발급 시각 |
/// | `exp`  | 만료 시각 | 만료 시각 |
/// | `name` | 표시 이름 | - |
/// | `typ`  | `"access"` | - |
///
/// 리프레시 토큰은 유출되더라도 불투명한 사용자 ID 외에는 아무것도 드러내지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 발급자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// 대상
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 표시 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 토큰 종류
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Claims {
    /// 액세스 토큰 클레임 생성
    pub fn access(
        principal: &Principal,
        issuer: &str,
        audience: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: principal.subject(),
            iss: Some(issuer.to_string()),
            aud: Some(audience.to_string()),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            name: Some(principal.display_name()),
            typ: Some(ACCESS_TOKEN_TYPE.to_string()),
        }
    }

    /// 리프레시 토큰 클레임 생성 (`sub`, `iat`, `exp`만 포함)
    pub fn refresh(principal: &Principal, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: principal.subject(),
            iss: None,
            aud: None,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            name: None,
            typ: None,
        }
    }

    /// 주어진 시각 기준 만료 여부 (`exp` 시각부터 만료)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// JWT 토큰 쌍 구조체
///
/// 로그인과 리프레시 응답 본문으로 직렬화됩니다.
/// 두 토큰은 같은 주체와 발급 시각을 공유하고 만료 시각만 다릅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}
