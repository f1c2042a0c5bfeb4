//! Google OAuth 응답 DTO 모듈
//!
//! 토큰 교환 응답과 콜백 엔드포인트가 반환하는 최종 응답을 정의합니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::oauth::GoogleIdClaims;

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 교환할 때 Google이 반환하는 데이터입니다.
/// 모든 필드는 선택 사항이며, 알 수 없는 필드는 무시됩니다.
///
/// ```json
/// {
///   "access_token": "ya29.a0AfH6SMC...",
///   "expires_in": 3599,
///   "refresh_token": "1//04z...",
///   "scope": "openid email profile",
///   "token_type": "Bearer",
///   "id_token": "eyJhbGciOiJSUzI1NiIs..."
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoogleTokenResponse {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
    /// `access_type=offline` + `prompt=consent` 요청 시에만 발급됩니다
    pub refresh_token: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
    /// 부여된 권한 범위 (공백 구분)
    pub scope: Option<String>,
}

/// `/auth/callback` 성공 응답
///
/// 검증된 ID 토큰의 프로필 정보와 토큰 교환 응답의 원본 토큰을 함께 담습니다.
/// 값이 없는 필드도 생략하지 않고 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackResponse {
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}

impl CallbackResponse {
    pub fn from_parts(claims: GoogleIdClaims, tokens: GoogleTokenResponse) -> Self {
        Self {
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
            access_token: tokens.access_token,
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            token_type: tokens.token_type,
            scope: tokens.scope,
        }
    }
}
