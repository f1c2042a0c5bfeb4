//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 불변 구조체로 모아 관리하는 모듈입니다.
//! 설정은 `main`에서 한 번 생성되어 핸들러로 주입되며, 전역 상태로 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - Google OAuth 클라이언트, 엔드포인트, 스코프 설정
//! - [`server_config`] - 바인딩 주소, 브라우저 자동 실행 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GoogleOAuthConfig, ServerConfig};
//!
//! let oauth = GoogleOAuthConfig::from_env();
//! let server = ServerConfig::from_env();
//! println!("Server will bind to {}", server.bind_address());
//! ```

pub mod auth_config;
pub mod server_config;

pub use auth_config::*;
pub use server_config::*;
