//! 네트워크 없이 서비스/핸들러를 테스트하기 위한 대역 구현

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use crate::config::GoogleOAuthConfig;
use crate::domain::{GoogleIdClaims, GoogleTokenResponse, TokenExchangeRequest};
use crate::errors::{AppError, AppResult};
use super::google_auth_service::GoogleAuthService;
use super::id_token_verifier::{IdTokenError, IdTokenVerifier};
use super::token_exchange_client::TokenExchangeClient;

pub const VALID_TOKEN: &str = "<valid-token>";

pub enum StubExchange {
    Tokens(GoogleTokenResponse),
    Fail(String),
}

/// 고정된 응답을 돌려주고 받은 요청을 기록하는 토큰 교환 대역
pub struct StubTokenClient {
    outcome: StubExchange,
    requests: Mutex<Vec<TokenExchangeRequest>>,
}

impl StubTokenClient {
    pub fn new(outcome: StubExchange) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<TokenExchangeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenExchangeClient for StubTokenClient {
    async fn exchange(&self, request: &TokenExchangeRequest) -> AppResult<GoogleTokenResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            StubExchange::Tokens(tokens) => Ok(tokens.clone()),
            StubExchange::Fail(reason) => Err(AppError::ExternalServiceError(format!(
                "Failed to exchange authorization code for tokens: {}",
                reason
            ))),
        }
    }
}

/// [`VALID_TOKEN`]과 지정된 audience만 받아들이는 검증기 대역
pub struct StubVerifier {
    audience: String,
    claims: GoogleIdClaims,
    calls: AtomicUsize,
}

impl StubVerifier {
    pub fn new(audience: &str, claims: GoogleIdClaims) -> Self {
        Self {
            audience: audience.to_string(),
            claims,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdTokenVerifier for StubVerifier {
    async fn verify(
        &self,
        id_token: &str,
        audience: &str,
        clock_skew: Duration,
    ) -> Result<GoogleIdClaims, IdTokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(clock_skew, Duration::from_secs(60));

        if id_token != VALID_TOKEN {
            return Err(IdTokenError::Invalid("InvalidSignature".to_string()));
        }
        if audience != self.audience {
            return Err(IdTokenError::Invalid("InvalidAudience".to_string()));
        }
        Ok(self.claims.clone())
    }
}

pub fn accepted_claims() -> GoogleIdClaims {
    GoogleIdClaims {
        iss: "https://accounts.google.com".to_string(),
        sub: "1234567890".to_string(),
        aud: "client-123".to_string(),
        email: Some("a@b.com".to_string()),
        name: Some("A".to_string()),
        picture: Some("url".to_string()),
        ..GoogleIdClaims::default()
    }
}

/// `client_id`로 설정을 만들고, 같은 값을 audience로 받아들이는 검증기와 함께 서비스를 구성합니다.
pub fn service_with(
    client_id: &str,
    outcome: StubExchange,
) -> (GoogleAuthService, Arc<StubTokenClient>, Arc<StubVerifier>) {
    let config = Arc::new(GoogleOAuthConfig::new(client_id, "client-secret"));
    let token_client = Arc::new(StubTokenClient::new(outcome));
    let verifier = Arc::new(StubVerifier::new(client_id, accepted_claims()));

    let service = GoogleAuthService::new(config, token_client.clone(), verifier.clone());
    (service, token_client, verifier)
}
