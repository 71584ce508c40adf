//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 [`AuthGate`](crate::services::auth::AuthGate)에 위임하고,
//! 그 결과를 상태 코드와 쿠키로 옮기는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - AuthGate, 토큰 발급/검증           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - PrincipalLookup               ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인, 토큰 갱신, 로그아웃
//!   - `POST /authenticate`
//!   - `GET /refresh`
//!   - `GET /logout`
//! - **`admin`**: 액세스 토큰이 필요한 보호 라우트
//!   - `GET /admin/session`
//!
//! ## 에러 처리
//!
//! 인증 거부는 원인과 무관하게 동일한 401 응답(`{"error":"unauthorized"}`)으로 나갑니다.
//! 구체적인 원인은 로그에만 남습니다.

pub mod auth;
pub mod admin;
