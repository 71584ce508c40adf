//! 영속 엔티티 모듈
//!
//! MongoDB에 저장되는 도메인 객체들입니다.

pub mod users;

pub use users::*;
