//! OAuth 콜백 요청 DTO
//!
//! Google이 사용자를 `/auth/callback`으로 돌려보낼 때 붙이는 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// `code`가 빠진 요청도 추출 단계에서 거부하지 않고, 서비스 계층에서
/// "Authorization code not provided." 로 응답하도록 `Option`으로 받습니다.
/// `scope`, `authuser`, `prompt` 등 그 밖의 파라미터는 무시됩니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// 토큰 엔드포인트로 보내는 Authorization Code 교환 요청
///
/// `application/x-www-form-urlencoded` 본문으로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TokenExchangeRequest {
    pub code: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub grant_type: String,
}

impl TokenExchangeRequest {
    /// `grant_type=authorization_code` 교환 요청을 만듭니다.
    pub fn authorization_code(
        code: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            grant_type: "authorization_code".to_string(),
        }
    }
}
