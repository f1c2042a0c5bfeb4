//! 서버 바인딩 및 부트스트랩 설정 관리 모듈

use std::env;

/// 서버 바인딩 설정
///
/// `HOST`, `PORT`, `OPEN_BROWSER` 환경 변수에서 읽습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "localhost"
    pub host: String,
    /// 포트 번호. 기본값: 8000
    pub port: u16,
    /// 시작 시 브라우저로 `/login`을 열지 여부. 기본값: true
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 조회 함수로부터 서버 설정을 구성합니다.
    ///
    /// 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|e| {
                log::error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let open_browser = lookup("OPEN_BROWSER")
            .map(|raw| !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(defaults.open_browser);

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            open_browser,
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 브라우저로 열 로그인 페이지 URL
    pub fn login_url(&self) -> String {
        format!("http://{}/login", self.bind_address())
    }
}
