//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 조회를 담당하며,
//! [`PrincipalLookup`] 계약을 통해 인증 코어에 인증 주체를 제공합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::domain::models::auth::Principal;
use crate::errors::AppError;
use crate::repositories::users::PrincipalLookup;

/// 사용자 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique)
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// MongoDB 오류는 `AppError::DatabaseError`로 변환됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
/// let user = repo.find_by_email("admin@example.com").await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 컬렉션 이름
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다.
    /// 이미 중복 이메일이 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PrincipalLookup for UserRepository {
    async fn find_principal_by_id(&self, id: i64) -> Result<Option<Principal>, AppError> {
        Ok(self.find_by_id(id).await?.map(|user| user.to_principal()))
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<Principal>, AppError> {
        let principal = self
            .find_by_email(email)
            .await?
            .filter(|user| user.password_matches(password))
            .map(|user| user.to_principal());

        Ok(principal)
    }
}
