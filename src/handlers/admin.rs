//! 보호된 관리자 라우트
//!
//! `AuthMiddleware`로 감싼 `/admin` 스코프에서만 등록됩니다.
use actix_web::{get, HttpResponse};
use crate::domain::models::auth::AuthenticatedUser;

/// 현재 세션 정보
///
/// # Endpoint
/// `GET /admin/session`
#[get("/session")]
pub async fn session(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}
