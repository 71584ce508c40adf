//! 사용자 데이터 액세스 계층
//!
//! [`PrincipalLookup`](principal_lookup::PrincipalLookup) 계약과
//! MongoDB 기반 구현체 [`UserRepository`](user_repo::UserRepository)를 제공합니다.

pub mod principal_lookup;
pub mod user_repo;

pub use principal_lookup::PrincipalLookup;
pub use user_repo::UserRepository;
