//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 로그인/콜백 파이프라인에서 발생하는 모든 실패를 하나의 열거형으로 모읍니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 실패를
//! 상태 코드와 `{"detail": "..."}` 본문을 가진 HTTP 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ConfigurationError` | 500 | Google client ID 미설정 |
//! | `BadRequest` | 400 | code 누락, id_token 누락, ID 토큰 검증 실패 |
//! | `ExternalServiceError` | 500 | 토큰 엔드포인트/인증서 엔드포인트 통신 실패 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn require_code(code: Option<&str>) -> Result<&str, AppError> {
//!     code.filter(|c| !c.is_empty())
//!         .ok_or_else(|| AppError::BadRequest("Authorization code not provided.".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 클라이언트에게 그대로 전달되는 사람이 읽을 수 있는 메시지를 가집니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 설정값 누락 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 잘못된 요청 또는 인증 실패 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// 응답 본문에 들어가는 상세 메시지를 반환합니다.
    ///
    /// `Display` 구현과 달리 에러 분류 접두어가 붙지 않습니다.
    pub fn detail(&self) -> &str {
        match self {
            AppError::ConfigurationError(msg)
            | AppError::BadRequest(msg)
            | AppError::ExternalServiceError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 4xx는 `warn`, 5xx는 `error` 레벨로 기록한 뒤 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "detail": self.detail()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
