//! 도메인 타입의 에러 정의.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// 조회 일수가 허용 범위를 벗어남
    #[error("잘못된 조회 일수: {0} (1-10 사이의 정수여야 합니다)")]
    InvalidDayCount(String),

    /// 날짜 키 형식 오류
    #[error("잘못된 날짜 키: {0} (dd.mm.yyyy 형식이어야 합니다)")]
    InvalidDateKey(String),

    /// 알 수 없는 통화 코드
    #[error("지원하지 않는 통화: {0}")]
    UnsupportedCurrency(String),

    /// 로깅 초기화 에러
    #[error("로깅 초기화 실패: {0}")]
    Logging(String),
}

/// 도메인 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// 사용자 입력 오류인지 확인합니다.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CoreError::InvalidDayCount(_))
    }
}
