//! Authorization Code 토큰 교환 클라이언트
//!
//! Google 토큰 엔드포인트와의 서버 간 통신을 [`TokenExchangeClient`] trait 뒤에 숨깁니다.
//! 운영 환경에서는 [`ReqwestTokenExchangeClient`]를 사용하고, 테스트에서는
//! 네트워크 없이 동작하는 대역(stub)을 주입합니다.
//!
//! # 요청 형식
//!
//! ```text
//! POST https://oauth2.googleapis.com/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! code=AUTHORIZATION_CODE&
//! client_id=YOUR_CLIENT_ID&
//! client_secret=YOUR_CLIENT_SECRET&
//! redirect_uri=YOUR_REDIRECT_URI&
//! grant_type=authorization_code
//! ```

use async_trait::async_trait;
use crate::domain::{GoogleTokenResponse, TokenExchangeRequest};
use crate::errors::{AppError, AppResult};

/// 토큰 교환 실패 메시지 접두어
const EXCHANGE_FAILED: &str = "Failed to exchange authorization code for tokens";

/// Authorization Code를 토큰으로 교환하는 기능
///
/// 구현체는 단 한 번 요청하며 재시도하지 않습니다.
#[async_trait]
pub trait TokenExchangeClient: Send + Sync {
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 네트워크 오류, 비정상 상태 코드, 응답 파싱 실패
    async fn exchange(&self, request: &TokenExchangeRequest) -> AppResult<GoogleTokenResponse>;
}

/// `reqwest` 기반 토큰 교환 클라이언트
pub struct ReqwestTokenExchangeClient {
    client: reqwest::Client,
    token_uri: String,
}

impl ReqwestTokenExchangeClient {
    pub fn new(client: reqwest::Client, token_uri: impl Into<String>) -> Self {
        Self {
            client,
            token_uri: token_uri.into(),
        }
    }
}

#[async_trait]
impl TokenExchangeClient for ReqwestTokenExchangeClient {
    async fn exchange(&self, request: &TokenExchangeRequest) -> AppResult<GoogleTokenResponse> {
        log::debug!("토큰 교환 요청: {}", self.token_uri);

        let response = self
            .client
            .post(&self.token_uri)
            .form(request)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{}: {}", EXCHANGE_FAILED, e)))?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{}: {} for url: {}: {}",
                EXCHANGE_FAILED, status, url, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Failed to parse token response: {}", e)))
    }
}
