use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;
use crate::domain::models::token::token::Claims;

/// 검증된 액세스 토큰에서 추출된 사용자 정보
///
/// `AuthMiddleware`가 요청 Extensions에 저장한 [`Claims`]로부터 만들어집니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (`sub` 클레임)
    pub user_id: String,

    /// 표시 이름 (`name` 클레임)
    pub display_name: Option<String>,

    /// 액세스 토큰 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}

impl From<&Claims> for AuthenticatedUser {
    fn from(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            display_name: claims.name.clone(),
            expires_at: claims.exp,
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthenticatedUser::from(claims))),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
