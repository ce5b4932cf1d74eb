//! 환율 데이터 제공자.
//!
//! - [`RateSource`]: 날짜 하나의 환율 응답을 가져오는 추상화
//! - [`PrivatBankClient`]: PrivatBank 아카이브 API 구현

pub mod privatbank;

pub use privatbank::PrivatBankClient;

use async_trait::async_trait;
use fx_core::{DateKey, RawRatePayload};

use crate::error::Result;

/// 날짜별 환율 응답 제공자 트레잇.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// 제공자 이름 (로그용).
    fn name(&self) -> &str;

    /// 지정한 날짜의 환율 응답 원본을 조회합니다.
    async fn fetch_day(&self, date: DateKey) -> Result<RawRatePayload>;
}

/// 응답 본문을 [`RawRatePayload`]로 파싱합니다.
///
/// 형식이 맞지 않는 본문(정규화 결과를 다시 넣은 경우 포함)은
/// 패닉 없이 에러를 반환합니다.
pub fn parse_payload(body: &str) -> serde_json::Result<RawRatePayload> {
    serde_json::from_str(body)
}
