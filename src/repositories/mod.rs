//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 인증 코어는 구체 리포지토리가 아닌 [`PrincipalLookup`](users::PrincipalLookup) trait에만 의존합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{PrincipalLookup, UserRepository};
//!
//! let lookup: Arc<dyn PrincipalLookup> = Arc::new(UserRepository::new(database));
//! let principal = lookup.find_principal_by_id(1).await?;
//! ```

pub mod users;
