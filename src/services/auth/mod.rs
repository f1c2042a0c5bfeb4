//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 Authorization Code 플로우를 구성하는 서비스들을 제공합니다.
//!
//! # Components
//!
//! - [`GoogleAuthService`] - 로그인 URL 생성, code 교환 파이프라인
//! - [`TokenExchangeClient`] - 토큰 엔드포인트 호출 추상화 (`reqwest` 구현 포함)
//! - [`IdTokenVerifier`] - ID 토큰 검증 추상화 (Google JWKS 구현 포함)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::GoogleAuthService;
//!
//! let service = GoogleAuthService::from_config(Arc::new(config), reqwest::Client::new());
//! let login_url = service.login_url()?;
//! ```

pub mod google_auth_service;
pub mod id_token_verifier;
pub mod token_exchange_client;

#[cfg(test)]
pub(crate) mod test_support;

pub use google_auth_service::*;
pub use id_token_verifier::*;
pub use token_exchange_client::*;
