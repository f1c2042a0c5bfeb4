//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 클라이언트 설정을 관리하는 모듈입니다.
//! 프로세스 시작 시 환경 변수에서 한 번 읽어 불변 객체로 만들고,
//! 이후에는 `Arc<GoogleOAuthConfig>`로 핸들러와 서비스에 주입합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export SECRET_KEY="session-signing-secret"
//!
//! # 선택 (기본값 존재)
//! export GOOGLE_REDIRECT_URI="http://localhost:8000/auth/callback"
//! export GOOGLE_AUTH_URI="https://accounts.google.com/o/oauth2/auth"
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export GOOGLE_CERTS_URI="https://www.googleapis.com/oauth2/v3/certs"
//! export GOOGLE_SCOPES="openid email profile https://mail.google.com/"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::GoogleOAuthConfig;
//!
//! let config = Arc::new(GoogleOAuthConfig::from_env());
//! let client_id = config.require_client_id()?;
//! ```

use std::env;
use crate::errors::{AppError, AppResult};

/// 기본 OAuth 콜백 URI
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/auth/callback";
/// Google 인증(동의 화면) 엔드포인트
pub const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
/// Google 토큰 교환 엔드포인트
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
/// Google ID 토큰 서명 키(JWKS) 엔드포인트
pub const DEFAULT_CERTS_URI: &str = "https://www.googleapis.com/oauth2/v3/certs";
/// 기본 요청 스코프 (Gmail 전체 접근 포함)
pub const DEFAULT_SCOPES: &str = "openid email profile https://mail.google.com/";

/// Google OAuth 2.0 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보와
/// 프로바이더 엔드포인트를 담습니다. 생성 이후에는 변경되지 않습니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`과 `session_secret`은 로그에 출력하지 않습니다
/// - `Debug` 출력에서도 비밀값은 가려집니다
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    /// OAuth Client ID. 비어 있을 수 있으며, 이 경우 `/login` 요청 시점에 실패합니다.
    pub client_id: String,
    pub client_secret: String,
    /// 세션 쿠키 서명용 비밀키 (`SECRET_KEY`)
    pub session_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub certs_uri: String,
    pub scopes: Vec<String>,
}

impl GoogleOAuthConfig {
    /// 클라이언트 자격 증명만 지정하고 나머지는 기본값으로 채운 설정을 생성합니다.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            session_secret: String::new(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            auth_uri: DEFAULT_AUTH_URI.to_string(),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            certs_uri: DEFAULT_CERTS_URI.to_string(),
            scopes: split_scopes(DEFAULT_SCOPES),
        }
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// 필수 값이 없어도 패닉하지 않습니다. 누락된 값은 경고 로그를 남기고
    /// 빈 문자열로 둡니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 구성합니다.
    ///
    /// 테스트에서 프로세스 환경을 건드리지 않고 설정을 만들 때 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup("GOOGLE_CLIENT_ID").unwrap_or_default();
        if client_id.is_empty() {
            log::warn!("GOOGLE_CLIENT_ID not set, /login will fail until it is configured");
        }

        let client_secret = lookup("GOOGLE_CLIENT_SECRET").unwrap_or_default();
        if client_secret.is_empty() {
            log::warn!("GOOGLE_CLIENT_SECRET not set, token exchange will be rejected by Google");
        }

        let session_secret = lookup("SECRET_KEY").unwrap_or_else(|| {
            log::warn!("SECRET_KEY not set, using default (not secure for production!)");
            "insecure-session-secret".to_string()
        });

        let scopes = lookup("GOOGLE_SCOPES")
            .map(|s| split_scopes(&s))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| split_scopes(DEFAULT_SCOPES));

        Self {
            client_id,
            client_secret,
            session_secret,
            redirect_uri: lookup("GOOGLE_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            auth_uri: lookup("GOOGLE_AUTH_URI").unwrap_or_else(|| DEFAULT_AUTH_URI.to_string()),
            token_uri: lookup("GOOGLE_TOKEN_URI").unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
            certs_uri: lookup("GOOGLE_CERTS_URI").unwrap_or_else(|| DEFAULT_CERTS_URI.to_string()),
            scopes,
        }
    }

    /// 설정된 Client ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - Client ID가 빈 문자열인 경우 (공백만 있는 값은 그대로 통과)
    pub fn require_client_id(&self) -> AppResult<&str> {
        if self.client_id.is_empty() {
            return Err(AppError::ConfigurationError(
                "Google client ID is not configured.".to_string(),
            ));
        }
        Ok(&self.client_id)
    }

    /// 스코프 목록을 공백으로 이어 붙인 문자열을 반환합니다.
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

impl std::fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("session_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("certs_uri", &self.certs_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

fn split_scopes(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_credentials_set() {
        let config = GoogleOAuthConfig::from_lookup(lookup_from(&[
            ("GOOGLE_CLIENT_ID", "client-123"),
            ("GOOGLE_CLIENT_SECRET", "secret-456"),
            ("SECRET_KEY", "session"),
        ]));

        assert_eq!(config.client_id, "client-123");
        assert_eq!(config.client_secret, "secret-456");
        assert_eq!(config.session_secret, "session");
        assert_eq!(config.redirect_uri, DEFAULT_REDIRECT_URI);
        assert_eq!(config.auth_uri, DEFAULT_AUTH_URI);
        assert_eq!(config.token_uri, DEFAULT_TOKEN_URI);
        assert_eq!(config.certs_uri, DEFAULT_CERTS_URI);
        assert_eq!(config.scope_string(), DEFAULT_SCOPES);
    }

    #[test]
    fn test_overrides_are_respected() {
        let config = GoogleOAuthConfig::from_lookup(lookup_from(&[
            ("GOOGLE_CLIENT_ID", "client"),
            ("GOOGLE_REDIRECT_URI", "https://example.com/cb"),
            ("GOOGLE_TOKEN_URI", "http://127.0.0.1:9999/token"),
            ("GOOGLE_SCOPES", "  openid   email "),
        ]));

        assert_eq!(config.redirect_uri, "https://example.com/cb");
        assert_eq!(config.token_uri, "http://127.0.0.1:9999/token");
        assert_eq!(config.scopes, vec!["openid", "email"]);
    }

    #[test]
    fn test_blank_scope_override_falls_back_to_default() {
        let config = GoogleOAuthConfig::from_lookup(lookup_from(&[("GOOGLE_SCOPES", "   ")]));
        assert_eq!(config.scope_string(), DEFAULT_SCOPES);
    }

    #[test]
    fn test_missing_client_id_is_configuration_error() {
        let config = GoogleOAuthConfig::from_lookup(lookup_from(&[]));

        assert!(config.client_id.is_empty());
        match config.require_client_id() {
            Err(AppError::ConfigurationError(msg)) => {
                assert_eq!(msg, "Google client ID is not configured.")
            }
            other => panic!("Expected ConfigurationError, got {:?}", other),
        }
    }

    #[test]
    fn test_only_empty_client_id_is_rejected() {
        let config = GoogleOAuthConfig::new(" ", "secret");
        assert_eq!(config.require_client_id().unwrap(), " ");

        let config = GoogleOAuthConfig::new("", "secret");
        assert!(config.require_client_id().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut config = GoogleOAuthConfig::new("client", "very-secret");
        config.session_secret = "also-secret".to_string();
        let debug = format!("{:?}", config);

        assert!(debug.contains("client"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("also-secret"));
    }
}
