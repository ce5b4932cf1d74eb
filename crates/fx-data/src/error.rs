//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 조회/저장 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP 요청 오류 (연결 실패 등)
    #[error("HTTP request error: {0}")]
    HttpError(String),

    /// 성공이 아닌 HTTP 상태 코드
    #[error("Unexpected status {status} for {date}")]
    StatusError { date: String, status: u16 },

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 응답 본문 파싱 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 캐시 미스
    #[error("Cache miss: {0}")]
    CacheMiss(String),

    /// 직렬화 오류
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    IoError(String),

    /// 설정 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DataError {
    /// 일시적인 오류인지 확인합니다.
    ///
    /// 재시도는 하지 않으며 로그 분류에만 사용합니다.
    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::HttpError(_) | DataError::Timeout(_) => true,
            DataError::StatusError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DataError::Timeout(err.to_string())
        } else if err.is_decode() {
            DataError::ParseError(err.to_string())
        } else {
            DataError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
