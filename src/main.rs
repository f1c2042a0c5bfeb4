//! Google OAuth 로그인 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 Actix-web HTTP 서버를 구동합니다.
//! 서버가 포트를 바인딩한 뒤 브라우저로 로그인 페이지를 엽니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use google_oauth_login::config::{GoogleOAuthConfig, ServerConfig};
use google_oauth_login::routes::configure_all_routes;
use google_oauth_login::services::auth::GoogleAuthService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env 로드 결과는 로거 초기화 이후에 기록합니다
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();

    info!("Current profile: {}", profile);
    match env_file {
        Ok(path) => info!("{} 파일 로드 됨", path),
        Err(e) => warn!(".env 파일 로드 실패: {}", e),
    }

    info!("🚀 Google OAuth 로그인 서비스 시작중...");

    let oauth_config = Arc::new(GoogleOAuthConfig::from_env());
    let server_config = ServerConfig::from_env();
    info!("OAuth 설정: {:?}", oauth_config);

    let auth_service = web::Data::new(GoogleAuthService::from_config(
        oauth_config,
        reqwest::Client::new(),
    ));

    start_http_server(server_config, auth_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 바인딩에 성공한 뒤에만 브라우저를 열기 때문에, 브라우저가 먼저 도착해
/// 연결이 거부되는 일이 없습니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    server_config: ServerConfig,
    auth_service: web::Data<GoogleAuthService>,
) -> std::io::Result<()> {
    let bind_address = server_config.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)
        .inspect_err(|e| error!("{} 바인딩 실패: {}", bind_address, e))?;

    let login_url = server_config.login_url();
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: {}", login_url);

    if server_config.open_browser {
        open_login_page(&login_url);
    }

    server.run().await
}

/// 기본 브라우저로 로그인 페이지를 엽니다
///
/// 헤드리스 환경처럼 브라우저를 열 수 없으면 URL만 안내하고 계속 진행합니다.
fn open_login_page(login_url: &str) {
    match open::that(login_url) {
        Ok(()) => info!("브라우저에서 로그인 페이지를 열었습니다"),
        Err(e) => warn!(
            "브라우저를 열 수 없습니다 ({}). 직접 접속하세요: {}",
            e, login_url
        ),
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드, 없으면 .env (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file(profile: &str) -> dotenv::Result<String> {
    let loaded = match profile {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").or_else(|_| dotenv::dotenv()),
        _ => dotenv::dotenv(),
    }?;

    Ok(loaded.display().to_string())
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 특정 모듈만 debug
/// RUST_LOG=google_oauth_login::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
