//! # Domain Models Module
//!
//! 외부 시스템(Google OpenID Connect)과의 통합을 위한 값 객체를 정의합니다.
//! 요청 하나의 수명 동안만 존재하며 저장되지 않습니다.

pub mod oauth;

pub use oauth::*;
