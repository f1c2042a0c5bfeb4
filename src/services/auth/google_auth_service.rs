//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 Authorization Code 플로우의 서버 측 두 단계를 담당합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐                 ┌─────────────────┐                 ┌─────────────────┐
//! │  브라우저     │                 │   우리 서버       │                 │  Google OAuth   │
//! └─────────────┘                 └─────────────────┘                 └─────────────────┘
//!        │ 1. GET /login                    │                                   │
//!        ├─────────────────────────────────►│                                   │
//!        │ 2. 302 Redirect (auth URL)       │                                   │
//!        │◄─────────────────────────────────┤                                   │
//!        │ 3. 사용자 동의                      │                                   │
//!        ├─────────────────────────────────────────────────────────────────────►│
//!        │ 4. GET /auth/callback?code=...   │                                   │
//!        ├─────────────────────────────────►│ 5. POST token_uri (code 교환)       │
//!        │                                  ├──────────────────────────────────►│
//!        │                                  │ 6. id_token, access_token, ...    │
//!        │                                  │◄──────────────────────────────────┤
//!        │                                  │ 7. id_token 검증 (JWKS)             │
//!        │ 8. 200 JSON (프로필 + 토큰)         │                                   │
//!        │◄─────────────────────────────────┤                                   │
//! ```
//!
//! ## 실패 경로
//!
//! | 단계 | 실패 | 응답 |
//! |------|------|------|
//! | 로그인 | Client ID 미설정 | 500 |
//! | 콜백 | code 누락 | 400 |
//! | 콜백 | 토큰 엔드포인트 통신 실패/비정상 상태 | 500 |
//! | 콜백 | 응답에 id_token 없음 | 400 |
//! | 콜백 | id_token 검증 실패 | 400 |
//!
//! 토큰은 저장하지 않으며, 재시도도 하지 않습니다.

use std::sync::Arc;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use crate::config::GoogleOAuthConfig;
use crate::domain::{CallbackResponse, TokenExchangeRequest};
use crate::errors::{AppError, AppResult};
use super::id_token_verifier::{GoogleIdTokenVerifier, IdTokenVerifier, ID_TOKEN_CLOCK_SKEW};
use super::token_exchange_client::{ReqwestTokenExchangeClient, TokenExchangeClient};

/// 쿼리 값에서 이스케이프할 문자 집합
///
/// `:`와 `/`는 쿼리 구성요소에서 허용되므로 그대로 두어 redirect URI가 읽히는 형태로 남습니다.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Google OAuth 2.0 인증 서비스
///
/// 불변 설정과 두 개의 외부 통신 기능(토큰 교환, ID 토큰 검증)을 주입받습니다.
/// 요청 간에 공유되는 가변 상태가 없으므로 `web::Data`로 그대로 공유할 수 있습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::config::GoogleOAuthConfig;
/// use crate::services::auth::GoogleAuthService;
///
/// let config = Arc::new(GoogleOAuthConfig::from_env());
/// let service = GoogleAuthService::from_config(config, reqwest::Client::new());
///
/// let login_url = service.login_url()?;
/// let profile = service.authenticate_with_code(Some("4/0AX4XfWh...")).await?;
/// ```
pub struct GoogleAuthService {
    config: Arc<GoogleOAuthConfig>,
    token_client: Arc<dyn TokenExchangeClient>,
    verifier: Arc<dyn IdTokenVerifier>,
}

impl GoogleAuthService {
    pub fn new(
        config: Arc<GoogleOAuthConfig>,
        token_client: Arc<dyn TokenExchangeClient>,
        verifier: Arc<dyn IdTokenVerifier>,
    ) -> Self {
        Self {
            config,
            token_client,
            verifier,
        }
    }

    /// 설정의 엔드포인트를 사용하는 `reqwest` 기반 구현체로 서비스를 구성합니다.
    pub fn from_config(config: Arc<GoogleOAuthConfig>, http: reqwest::Client) -> Self {
        let token_client = Arc::new(ReqwestTokenExchangeClient::new(
            http.clone(),
            config.token_uri.clone(),
        ));
        let verifier = Arc::new(GoogleIdTokenVerifier::new(http, config.certs_uri.clone()));

        Self::new(config, token_client, verifier)
    }

    /// Google OAuth 로그인(동의 화면) URL 생성
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/auth?
    ///   response_type=code&
    ///   client_id=YOUR_CLIENT_ID&
    ///   redirect_uri=http://localhost:8000/auth/callback&
    ///   scope=openid%20email%20profile%20https://mail.google.com/&
    ///   access_type=offline&
    ///   prompt=consent
    /// ```
    ///
    /// `access_type=offline`과 `prompt=consent`를 함께 보내야 refresh token이 매번 발급됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - Client ID가 설정되지 않은 경우 (URL을 만들기 전에 실패)
    pub fn login_url(&self) -> AppResult<String> {
        let client_id = self.config.require_client_id()?;
        let scope = self.config.scope_string();

        let params = [
            ("response_type", "code"),
            ("client_id", client_id),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");

        log::info!("Google 로그인 URL 생성 - client_id: {}", client_id);

        Ok(format!("{}?{}", self.config.auth_uri, query_string))
    }

    /// Authorization Code를 토큰으로 교환하고 ID 토큰을 검증합니다.
    ///
    /// # 처리 단계
    ///
    /// 1. code 존재 확인
    /// 2. 토큰 엔드포인트로 code 교환 (1회)
    /// 3. 응답의 `id_token` 존재 확인
    /// 4. `id_token` 서명/발급자/대상/만료 검증 (시계 오차 60초)
    /// 5. 프로필과 원본 토큰을 합친 응답 생성
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - code 누락, id_token 누락, ID 토큰 검증 실패
    /// * `AppError::ExternalServiceError` - 토큰 엔드포인트 또는 서명 키 조회 실패
    pub async fn authenticate_with_code(&self, code: Option<&str>) -> AppResult<CallbackResponse> {
        let code = code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::BadRequest("Authorization code not provided.".to_string()))?;

        let request = TokenExchangeRequest::authorization_code(
            code,
            self.config.client_id.as_str(),
            self.config.client_secret.as_str(),
            self.config.redirect_uri.as_str(),
        );

        let tokens = self.token_client.exchange(&request).await?;

        let id_token = tokens.id_token.as_deref().ok_or_else(|| {
            AppError::BadRequest("Authentication failed: ID token not found.".to_string())
        })?;

        let claims = self
            .verifier
            .verify(id_token, &self.config.client_id, ID_TOKEN_CLOCK_SKEW)
            .await?;

        log::info!("Google OAuth 로그인 성공: sub={}", claims.sub);

        Ok(CallbackResponse::from_parts(claims, tokens))
    }
}
