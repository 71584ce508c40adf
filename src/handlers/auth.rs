//! Authentication HTTP Handlers
//!
//! 로그인, 리프레시 토큰 회전, 로그아웃 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /authenticate` - 이메일/비밀번호 로그인, 202 + 토큰 쌍 + 리프레시 쿠키
//! - `GET /refresh` - 리프레시 쿠키로 토큰 쌍 재발급, 200 + 회전된 쿠키
//! - `GET /logout` - 리프레시 쿠키 삭제, 202
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use chrono::Utc;
use validator::Validate;
use crate::domain::dto::LoginRequest;
use crate::errors::{AppError, AppResult, AuthError};
use crate::services::auth::AuthGate;

/// 로컬 로그인 핸들러
///
/// 이메일과 패스워드를 확인한 뒤 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /authenticate`
///
/// # Errors
///
/// * `AppError::ValidationError` - 요청 본문 검증 실패 (400)
/// * `AppError::InvalidCredentials` - 사용자가 없거나 비밀번호 불일치 (400)
/// * `AppError::DatabaseError` - 저장소 오류 (500)
#[post("/authenticate")]
pub async fn authenticate(
    gate: web::Data<AuthGate>,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let principal = gate
        .principals()
        .verify_credentials(&payload.email, &payload.password)
        .await?
        .ok_or_else(|| {
            log::warn!("로그인 실패 - 자격 증명 불일치");
            AppError::InvalidCredentials
        })?;

    let session = gate.login(&principal, Utc::now())?;

    Ok(HttpResponse::Accepted()
        .cookie(session.cookie)
        .json(session.tokens))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 쿠키를 검증하고 새 토큰 쌍과 회전된 쿠키를 돌려줍니다.
/// 거부 시 쿠키를 쓰지 않습니다.
///
/// # Endpoint
/// `GET /refresh`
#[get("/refresh")]
pub async fn refresh(
    gate: web::Data<AuthGate>,
    req: HttpRequest,
) -> Result<HttpResponse, AuthError> {
    let session = gate.refresh(&req, Utc::now()).await?;

    Ok(HttpResponse::Ok()
        .cookie(session.cookie)
        .json(session.tokens))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(gate: web::Data<AuthGate>) -> HttpResponse {
    HttpResponse::Accepted()
        .cookie(gate.logout())
        .finish()
}
