//! Google ID 토큰 도메인 모델
//!
//! 검증을 마친 ID 토큰의 클레임과, 서명 검증에 쓰이는 JWKS(JSON Web Key Set)
//! 구조를 정의합니다.

use serde::{Deserialize, Serialize};

/// Google ID 토큰의 검증된 클레임
///
/// `iss`, `sub`, `aud`, `exp`, `iat`는 필수입니다. 프로필 정보는 요청한
/// 스코프(`email`, `profile`)에 따라 빠질 수 있으므로 선택 필드로 둡니다.
///
/// ```json
/// {
///   "iss": "https://accounts.google.com",
///   "azp": "1234987819200.apps.googleusercontent.com",
///   "aud": "1234987819200.apps.googleusercontent.com",
///   "sub": "10769150350006150715113082367",
///   "email": "jsmith@example.com",
///   "email_verified": true,
///   "name": "John Smith",
///   "picture": "https://lh3.googleusercontent.com/a/photo.jpg",
///   "iat": 1353601026,
///   "exp": 1353604926
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleIdClaims {
    /// 발급자 (`accounts.google.com` 또는 `https://accounts.google.com`)
    pub iss: String,
    /// Google 사용자 고유 식별자
    pub sub: String,
    /// 대상 클라이언트 ID
    pub aud: String,
    /// 만료 시각 (UNIX timestamp)
    pub exp: i64,
    /// 발급 시각 (UNIX timestamp)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// JSON Web Key Set
#[derive(Debug, Clone, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}

impl Jwks {
    /// `kid`가 일치하는 키를 찾습니다.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

/// RSA JSON Web Key
///
/// `n`, `e`는 base64url(패딩 없음)로 인코딩된 모듈러스와 지수입니다.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kid: String,
    #[serde(default)]
    pub kty: Option<String>,
    #[serde(default)]
    pub alg: Option<String>,
    pub n: String,
    pub e: String,
}

impl Jwk {
    /// RS256 서명 검증에 쓸 수 있는 키인지 확인합니다.
    ///
    /// `kty`가 없으면 RSA로 간주하고, `alg`는 있을 때만 확인합니다.
    pub fn is_rs256(&self) -> bool {
        self.kty.as_deref().is_none_or(|kty| kty == "RSA")
            && self.alg.as_deref().is_none_or(|alg| alg == "RS256")
    }
}
