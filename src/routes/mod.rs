//! API 라우트 설정 모듈
//!
//! OAuth 로그인 플로우 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /login` - Google 동의 화면으로 리다이렉트
//! - `GET /auth/callback` - Authorization code 처리
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(auth_service))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러는 `web::Data<GoogleAuthService>`가 앱 데이터로 등록되어 있다고 가정합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// OAuth 로그인 관련 라우트를 설정합니다
///
/// Google Cloud Console에 등록된 redirect URI가 `/auth/callback`이므로
/// 콜백은 `/auth` 스코프 아래에 둡니다.
/// 쿼리 역직렬화 실패도 다른 에러와 같은 `{"detail": ...}` 형태로 응답합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.service(handlers::auth::login)
        .service(
            web::scope("/auth")
                .app_data(query_config)
                .service(handlers::auth::auth_callback)
        );
}

/// 헬스체크 엔드포인트
///
/// # Endpoint
/// `GET /health`
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "google_oauth_login",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::services::auth::test_support::{service_with, StubExchange};
    use crate::domain::GoogleTokenResponse;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "google_oauth_login");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_route_returns_404() {
        let (service, _, _) = service_with(
            "client-123",
            StubExchange::Tokens(GoogleTokenResponse::default()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        for uri in ["/callback", "/auth/login", "/api/v1/auth/google/login"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri {}", uri);
        }
    }
}
