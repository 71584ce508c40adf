//! 요청/응답 DTO 모듈

pub mod auth_request;

pub use auth_request::LoginRequest;
