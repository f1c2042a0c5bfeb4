//! Authentication HTTP Handlers
//!
//! Google OAuth 2.0 로그인 플로우의 두 HTTP 엔드포인트입니다.
//! 핸들러는 요청 추출과 응답 구성만 하고, 나머지는 [`GoogleAuthService`]에 맡깁니다.
//!
//! - `GET /login` - Google 동의 화면으로 302 리다이렉트
//! - `GET /auth/callback?code=...` - code 교환 후 프로필 + 토큰 JSON 반환
use actix_web::{get, http::header, web, HttpResponse};
use crate::domain::OAuthCallbackQuery;
use crate::errors::AppError;
use crate::services::auth::GoogleAuthService;

/// Google OAuth 로그인 리다이렉트 핸들러
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login(
    service: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    let login_url = service.login_url()?;

    Ok(HttpResponse::Found()
        .append_header((header::LOCATION, login_url))
        .finish())
}

/// Google OAuth 콜백 처리 핸들러
///
/// Google OAuth 인증 완료 후 리다이렉트되는 콜백을 처리합니다.
///
/// # Endpoint
/// `GET /auth/callback?code={code}`
#[get("/callback")]
pub async fn auth_callback(
    service: web::Data<GoogleAuthService>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    // 사용자가 동의를 거부하면 code 없이 error만 전달됩니다
    if let Some(error) = &query.error {
        let description = query.error_description.as_deref().unwrap_or("-");
        log::warn!("Google OAuth 에러: {} - {}", error, description);
    }

    let response = service.authenticate_with_code(query.code.as_deref()).await?;

    Ok(HttpResponse::Ok().json(response))
}
