//! Google OAuth 2.0 로그인 서비스
//!
//! Authorization Code 플로우로 Google 로그인을 처리하는 작은 HTTP 서비스입니다.
//! 사용자를 Google 동의 화면으로 보내고, 콜백으로 돌아온 code를 토큰으로 교환한 뒤
//! ID 토큰을 Google 공개키로 검증해 프로필과 토큰을 JSON으로 돌려줍니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /login, /auth/callback, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로그인 URL, 토큰 교환, ID 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Google OAuth   │ ← token endpoint, JWKS
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use google_oauth_login::config::GoogleOAuthConfig;
//! use google_oauth_login::services::auth::GoogleAuthService;
//!
//! let config = Arc::new(GoogleOAuthConfig::from_env());
//! let service = GoogleAuthService::from_config(config, reqwest::Client::new());
//!
//! let login_url = service.login_url()?;
//! let response = service.authenticate_with_code(Some(code)).await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
