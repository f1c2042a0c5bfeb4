//! Google ID 토큰 검증 서비스
//!
//! 토큰 교환 응답에 포함된 `id_token`(RS256 JWT)을 Google의 현재 서명 키로 검증합니다.
//!
//! # 검증 단계
//!
//! 1. JWT 헤더에서 `kid`(키 식별자) 추출
//! 2. Google JWKS 엔드포인트에서 현재 서명 키 목록 조회 (검증마다 새로 조회)
//! 3. `kid`가 일치하는 RSA 키로 서명 검증
//! 4. `iss`가 Google 발급자인지, `aud`가 설정된 Client ID인지 확인
//! 5. `exp`, `iat`를 허용 오차(기본 60초) 안에서 확인
//!
//! ```text
//! id_token ──► decode_header ──► kid
//!                                 │
//!          GET certs_uri ◄────────┘
//!                │
//!                ▼
//!        DecodingKey(n, e) ──► decode::<GoogleIdClaims>(Validation) ──► iat 확인 ──► claims
//! ```

use std::time::Duration;
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use thiserror::Error;
use crate::domain::{GoogleIdClaims, Jwks};
use crate::errors::AppError;

/// `exp`/`iat` 확인 시 허용하는 시계 오차
pub const ID_TOKEN_CLOCK_SKEW: Duration = Duration::from_secs(60);

/// Google이 ID 토큰에 사용하는 발급자 값
pub const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// ID 토큰 검증 실패
#[derive(Error, Debug)]
pub enum IdTokenError {
    /// 서명, 발급자, 대상, 만료 등 토큰 자체가 유효하지 않음
    #[error("{0}")]
    Invalid(String),

    /// 서명 키 목록을 가져오지 못함
    #[error("Failed to fetch Google signing keys: {0}")]
    KeyFetch(String),
}

impl From<IdTokenError> for AppError {
    fn from(err: IdTokenError) -> Self {
        match err {
            IdTokenError::Invalid(reason) => {
                AppError::BadRequest(format!("Invalid ID token: {}", reason))
            }
            IdTokenError::KeyFetch(_) => AppError::ExternalServiceError(err.to_string()),
        }
    }
}

/// ID 토큰 검증 기능
///
/// "토큰 문자열 + 기대하는 audience + 시계 오차 → 클레임 또는 실패" 형태의 좁은 인터페이스입니다.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(
        &self,
        id_token: &str,
        audience: &str,
        clock_skew: Duration,
    ) -> Result<GoogleIdClaims, IdTokenError>;
}

/// Google JWKS 기반 ID 토큰 검증기
pub struct GoogleIdTokenVerifier {
    client: reqwest::Client,
    certs_uri: String,
    issuers: Vec<String>,
}

impl GoogleIdTokenVerifier {
    pub fn new(client: reqwest::Client, certs_uri: impl Into<String>) -> Self {
        Self {
            client,
            certs_uri: certs_uri.into(),
            issuers: GOOGLE_ISSUERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    async fn fetch_jwks(&self) -> Result<Jwks, IdTokenError> {
        let response = self
            .client
            .get(&self.certs_uri)
            .send()
            .await
            .map_err(|e| IdTokenError::KeyFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdTokenError::KeyFetch(format!(
                "{} for url: {}",
                status,
                response.url()
            )));
        }

        response
            .json::<Jwks>()
            .await
            .map_err(|e| IdTokenError::KeyFetch(e.to_string()))
    }
}

#[async_trait]
impl IdTokenVerifier for GoogleIdTokenVerifier {
    async fn verify(
        &self,
        id_token: &str,
        audience: &str,
        clock_skew: Duration,
    ) -> Result<GoogleIdClaims, IdTokenError> {
        let header = decode_header(id_token).map_err(|e| IdTokenError::Invalid(e.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| IdTokenError::Invalid("Token header has no key id (kid)".to_string()))?;

        let jwks = self.fetch_jwks().await?;
        let jwk = jwks.find(&kid).ok_or_else(|| {
            IdTokenError::Invalid(format!("No signing key found for kid {}", kid))
        })?;
        if !jwk.is_rs256() {
            return Err(IdTokenError::Invalid(format!(
                "Signing key {} is not an RS256 key (kty={:?}, alg={:?})",
                kid, jwk.kty, jwk.alg
            )));
        }

        let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| IdTokenError::Invalid(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_issuer(self.issuers.as_slice());
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = clock_skew.as_secs();

        let claims = decode::<GoogleIdClaims>(id_token, &key, &validation)
            .map_err(|e| IdTokenError::Invalid(e.to_string()))?
            .claims;

        check_issued_at(claims.iat, clock_skew)?;

        Ok(claims)
    }
}

/// 발급 시각이 현재 시각 + 허용 오차보다 미래인 토큰은 거부합니다.
fn check_issued_at(iat: i64, clock_skew: Duration) -> Result<(), IdTokenError> {
    let now = chrono::Utc::now().timestamp();
    let skew = i64::try_from(clock_skew.as_secs()).unwrap_or(i64::MAX);

    if iat > now.saturating_add(skew) {
        return Err(IdTokenError::Invalid(format!(
            "Token used too early, {} > {}",
            iat, now
        )));
    }
    Ok(())
}
