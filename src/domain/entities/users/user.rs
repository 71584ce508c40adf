//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 인증 코어에는 [`Principal`] 투영만 전달됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::models::auth::Principal;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID (토큰 `sub` 클레임의 원천)
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 이메일 (unique)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 토큰 발급에 필요한 최소 정보만 추출합니다.
    pub fn to_principal(&self) -> Principal {
        Principal::new(self.id, self.first_name.clone(), self.last_name.clone())
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 손상된 경우에도 `false`를 반환합니다.
    pub fn password_matches(&self, password: &str) -> bool {
        match bcrypt::verify(password, &self.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                log::error!("비밀번호 해시 검증 실패 - user_id: {}, 에러: {}", self.id, e);
                false
            }
        }
    }
}
