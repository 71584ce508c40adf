//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 시작 시 명시적으로 조립되어
//! `Arc`/`web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthGate;
//!
//! let gate = web::Data::new(AuthGate::new(config, principals));
//! App::new().app_data(gate.clone());
//! ```

pub mod auth;
