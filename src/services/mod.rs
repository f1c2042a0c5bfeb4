//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 `main`에서 명시적으로 구성되어
//! `web::Data`로 핸들러에 주입됩니다.

pub mod auth;
