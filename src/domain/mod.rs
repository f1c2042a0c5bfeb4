//! # Domain Layer Module
//!
//! 로그인 플로우에서 주고받는 데이터 구조를 모아 둔 계층입니다.
//! 영속화되는 엔티티는 없으며, 모든 값은 요청 하나의 수명 동안만 존재합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── dto      - HTTP 요청/응답, 토큰 교환 요청/응답
//! └── models   - Google ID 토큰 클레임, JWKS
//! ```

pub mod dto;
pub mod models;

pub use dto::oauth::*;
pub use models::oauth::*;
