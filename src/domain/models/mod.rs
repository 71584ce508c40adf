//! 인증 도메인 모델
//!
//! 토큰 클레임, 토큰 쌍, 인증 주체 등 인증 코어가 주고받는 값 타입들입니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
