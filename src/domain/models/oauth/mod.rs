//! # OAuth Domain Models Module
//!
//! Google OpenID Connect ID 토큰과 관련된 도메인 모델을 제공합니다.
//!
//! - [`google_id_token`] - 검증된 ID 토큰 클레임(`GoogleIdClaims`)과 서명 키 집합(`Jwks`)

pub mod google_id_token;

pub use google_id_token::*;
