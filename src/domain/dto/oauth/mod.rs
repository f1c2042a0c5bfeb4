//! OAuth 로그인 플로우 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
