//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 인증 관련 실패는 [`AuthError`]로 표현되며, 클라이언트가 복구할 수 있는
//! 모든 검증 실패는 구체적인 원인과 무관하게 동일한 401 응답으로 변환됩니다.
//! 원인 구분은 서버 로그에만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AuthError};
//!
//! fn parse_subject(sub: &str) -> Result<i64, AuthError> {
//!     sub.parse().map_err(|_| AuthError::UnknownUser)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 인증 코어의 실패 분류
///
/// 토큰 검증, 헤더 파싱, 리프레시 흐름에서 발생하는 모든 실패를 값으로 표현합니다.
/// `InternalEncodingFailure`를 제외한 모든 변형은 401로 응답됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization 헤더 누락 또는 `Bearer <token>` 형식 위반
    #[error("malformed authorization header")]
    MalformedHeader,

    /// 세그먼트 수, base64url, JSON, 알고리즘 등 토큰 구조 오류
    #[error("malformed token")]
    MalformedToken,

    /// HMAC 서명 불일치
    #[error("bad token signature")]
    BadSignature,

    /// 검증 시각 기준으로 `exp`가 지난 토큰
    #[error("token expired")]
    Expired,

    /// 서명은 유효하지만 발급자가 다른 토큰
    #[error("token issuer mismatch")]
    IssuerMismatch,

    /// 토큰 주체를 사용자로 해석할 수 없음 (파싱 실패, 미존재, 조회 실패)
    #[error("unknown user")]
    UnknownUser,

    /// 리프레시 쿠키가 요청에 없음
    #[error("refresh cookie not present")]
    MissingRefreshCookie,

    /// 정상 입력에 대한 서명 실패 (서버 결함)
    #[error("token encoding failed: {0}")]
    InternalEncodingFailure(String),
}

impl AuthError {
    /// 클라이언트 측 조건(401)인지 여부
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::InternalEncodingFailure(_))
    }
}

impl actix_web::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// 어떤 검증 단계가 실패했는지 응답 본문으로 드러내지 않습니다.
    fn error_response(&self) -> HttpResponse {
        let message = if self.is_client_error() {
            "unauthorized"
        } else {
            "internal server error"
        };

        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": message
            }))
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 로그인 자격 증명 불일치 (400 Bad Request)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 시작 시점 설정 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 인증 코어 에러 (상태 코드는 `AuthError`가 결정)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Auth(e) => e.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 내부 정보를 노출하지 않도록 일반 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Auth(e) => e.error_response(),
            _ if status.is_server_error() => HttpResponse::build(status)
                .json(serde_json::json!({
                    "error": "internal server error"
                })),
            _ => HttpResponse::build(status)
                .json(serde_json::json!({
                    "error": self.to_string()
                })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
