//! # Domain Layer Module
//!
//! 인증 코어가 다루는 값 타입과 영속 엔티티를 모아 둔 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 사용자 문서
//! ├── DTOs      - 로그인 요청 등 API 계약
//! └── Models    - Principal, Claims, TokenPair
//! ```
//!
//! 엔티티는 인증 코어로 직접 전달되지 않고, 항상 [`Principal`] 투영을 거칩니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
