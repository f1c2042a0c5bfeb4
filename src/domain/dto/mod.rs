//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계층과 외부 API 사이에서 오가는 데이터 구조를 정의합니다.
//!
//! ```text
//! Google ──(GoogleTokenResponse)──► Service ──(CallbackResponse)──► Client
//! Client ──(OAuthCallbackQuery)───► Handler
//! Service ──(TokenExchangeRequest)─► Google
//! ```

pub mod oauth;

pub use oauth::*;
