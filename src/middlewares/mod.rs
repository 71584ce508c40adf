//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 횡단 관심사를 처리하는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증
//! - 검증된 클레임을 request extension에 저장
//! - 실패 시 내부 서비스를 호출하지 않고 401 응답 (fail closed)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(gate.clone())
//!     .service(
//!         web::scope("/admin")
//!             .wrap(AuthMiddleware::required())
//!             .service(handlers::admin::session)
//!     )
//! ```
//!
//! [`AuthGate`](crate::services::auth::AuthGate)는 `web::Data`로 등록되어 있어야 합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
