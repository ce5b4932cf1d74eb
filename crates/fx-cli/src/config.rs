//! 환경변수 기반 설정 모듈.

use fx_data::provider::privatbank::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;

/// 기본 출력 파일 이름
pub const DEFAULT_OUTPUT_FILE: &str = "currency.json";

/// 환율 조회 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RatesConfig {
    /// 환율 API URL (`?json&date=...`가 뒤에 붙음)
    pub api_url: String,
    /// 결과 저장 파일 경로
    pub output_file: PathBuf,
    /// 요청당 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl RatesConfig {
    /// 환경변수에서 설정 로드 (`.env` 파일 포함)
    ///
    /// - `PRIVATBANK_API_URL`
    /// - `RATES_OUTPUT_FILE`
    /// - `RATES_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            api_url: std::env::var("PRIVATBANK_API_URL").unwrap_or(defaults.api_url),
            output_file: std::env::var("RATES_OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_file),
            request_timeout_secs: env_var_parse(
                "RATES_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }

    /// API URL 지정
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// 출력 파일 지정
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// 요청 타임아웃 지정 (초)
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RatesConfig::default();
        assert_eq!(config.api_url, "https://api.privatbank.ua/p24api/exchange_rates");
        assert_eq!(config.output_file, PathBuf::from("currency.json"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = RatesConfig::default()
            .with_api_url("http://127.0.0.1:8080/rates")
            .with_output_file("/tmp/out.json")
            .with_timeout_secs(5);

        assert_eq!(config.api_url, "http://127.0.0.1:8080/rates");
        assert_eq!(config.output_file, PathBuf::from("/tmp/out.json"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_env_var_parse_fallback() {
        assert_eq!(env_var_parse("FX_RATES_TEST_UNSET_VARIABLE", 42u64), 42);
    }

    #[test]
    fn test_env_var_parse_values() {
        std::env::set_var("FX_RATES_TEST_TIMEOUT_TEXT", "soon");
        assert_eq!(env_var_parse("FX_RATES_TEST_TIMEOUT_TEXT", 30u64), 30);

        std::env::set_var("FX_RATES_TEST_TIMEOUT_NUMBER", "7");
        assert_eq!(env_var_parse("FX_RATES_TEST_TIMEOUT_NUMBER", 30u64), 7);
    }
}
