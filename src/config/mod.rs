//! 애플리케이션 설정 모듈
//!
//! 인증 코어 설정([`AuthConfig`])과 서버/실행 환경 설정을 제공합니다.
//! 모든 설정은 시작 시 환경 변수(`.env.{PROFILE}` 파일 포함)에서 한 번 읽어옵니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
