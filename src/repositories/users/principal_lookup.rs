//! 인증 주체 조회 계약
//!
//! 인증 코어가 사용자 저장소에 요구하는 유일한 기능입니다.
//! 조회 타임아웃은 구현체가 소유하며, 인증 코어는 실패를 불투명하게 다루고 재시도하지 않습니다.

use async_trait::async_trait;

use crate::domain::models::auth::Principal;
use crate::errors::AppError;

/// 인증 주체 조회 trait
#[async_trait]
pub trait PrincipalLookup: Send + Sync {
    /// ID로 인증 주체를 조회합니다.
    ///
    /// * `Ok(Some(Principal))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError)` - 저장소 오류
    async fn find_principal_by_id(&self, id: i64) -> Result<Option<Principal>, AppError>;

    /// 이메일/비밀번호로 인증 주체를 확인합니다.
    ///
    /// 사용자가 없거나 비밀번호가 틀린 경우 모두 `Ok(None)`을 반환합니다.
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<Principal>, AppError>;
}
