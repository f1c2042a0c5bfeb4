//! HTTP 요청 핸들러 모듈
//!
//! 요청을 추출해 서비스 계층으로 넘기고, 결과를 HTTP 응답으로 변환합니다.
//! 에러는 [`crate::errors::AppError`]의 `ResponseError` 구현이 JSON 응답으로 바꿉니다.

pub mod auth;
