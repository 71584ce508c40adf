//! 인증 및 보안 서비스 모듈
//!
//! HMAC-SHA256으로 서명한 액세스/리프레시 토큰 쌍을 발급하고 검증하며,
//! 리프레시 토큰은 HttpOnly 쿠키로 회전시킵니다.
//!
//! ```text
//! ClaimsCodec ← TokenIssuer / TokenVerifier ← AuthGate → RefreshCookieManager
//!                                                  │
//!                                                  └→ PrincipalLookup
//! ```
//!
//! # Security
//!
//! - HS256 이외의 알고리즘(`none` 포함)은 서명 검사 전에 거부
//! - 서명 비교는 상수 시간
//! - 리프레시 쿠키는 `SameSite=Strict`, `HttpOnly`, `Secure`
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthGate;
//!
//! let gate = AuthGate::new(config, principals);
//! let session = gate.login(&principal, Utc::now())?;
//! ```

pub mod claims_codec;
pub mod token_issuer;
pub mod token_verifier;
pub mod cookie_manager;
pub mod auth_gate;

pub use claims_codec::ClaimsCodec;
pub use token_issuer::TokenIssuer;
pub use token_verifier::{TokenVerifier, VerificationOutcome, VerifyMode};
pub use cookie_manager::RefreshCookieManager;
pub use auth_gate::{AuthGate, IssuedSession};
