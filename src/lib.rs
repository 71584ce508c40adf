//! 영화 카탈로그 인증 서비스
//!
//! 짧은 수명의 액세스 토큰과 긴 수명의 리프레시 토큰을 발급하고,
//! 보호된 라우트에서 Bearer 액세스 토큰을 검증하며,
//! HttpOnly 쿠키에 담긴 리프레시 토큰을 회전시키는 인증 코어입니다.
//!
//! # Features
//!
//! - **토큰 발급**: HS256 서명 액세스/리프레시 토큰 쌍
//! - **토큰 검증**: 서명, 만료, 발급자 확인과 원인별 실패 값
//! - **리프레시 회전**: `SameSite=Strict` HttpOnly 쿠키
//! - **MongoDB**: 사용자 조회 및 bcrypt 비밀번호 확인
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /authenticate, /refresh, /logout, /admin/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers + Auth │ ← 요청/응답 처리, AuthMiddleware
//! │   Middleware    │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    AuthGate     │ ← 발급기, 검증기, 쿠키 관리자
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PrincipalLookup │ ← UserRepository (MongoDB)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movie_catalog_auth::config::AuthConfig;
//! use movie_catalog_auth::services::auth::AuthGate;
//!
//! let config = Arc::new(AuthConfig::from_env()?);
//! let gate = AuthGate::new(config, Arc::new(user_repository));
//! let session = gate.login(&principal, chrono::Utc::now())?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
