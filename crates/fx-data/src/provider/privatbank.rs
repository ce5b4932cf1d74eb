//! PrivatBank 환율 아카이브 API 클라이언트.
//!
//! 날짜별 UAH 기준 환율을 조회합니다. 인증은 필요 없습니다.
//!
//! # 요청 형식
//!
//! ```text
//! GET https://api.privatbank.ua/p24api/exchange_rates?json&date=01.12.2014
//! ```
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use fx_data::provider::{PrivatBankClient, RateSource};
//! use fx_core::DateKey;
//!
//! let client = PrivatBankClient::new()?;
//! let payload = client.fetch_day(DateKey::today()).await?;
//! ```

use async_trait::async_trait;
use fx_core::{DateKey, RawRatePayload};
use std::time::Duration;
use tracing::{debug, instrument};

use super::{parse_payload, RateSource};
use crate::error::{DataError, Result};

/// PrivatBank 아카이브 API 기본 URL
pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// 요청당 기본 타임아웃
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// PrivatBank 환율 API 클라이언트.
#[derive(Clone)]
pub struct PrivatBankClient {
    client: reqwest::Client,
    base_url: String,
}

impl PrivatBankClient {
    /// 기본 URL과 기본 타임아웃으로 생성합니다.
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// URL과 요청 타임아웃을 지정하여 생성합니다.
    pub fn with_config(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::ConfigError(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('?').to_string(),
        })
    }

    /// 날짜별 요청 URL.
    pub fn request_url(&self, date: DateKey) -> String {
        format!("{}?json&date={}", self.base_url, date)
    }
}

#[async_trait]
impl RateSource for PrivatBankClient {
    fn name(&self) -> &str {
        "privatbank"
    }

    #[instrument(skip(self, date), fields(date = %date))]
    async fn fetch_day(&self, date: DateKey) -> Result<RawRatePayload> {
        let url = self.request_url(date);
        debug!(url = %url, "환율 조회 요청");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::StatusError {
                date: date.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let payload = parse_payload(&body)
            .map_err(|e| DataError::ParseError(format!("{}: {}", date, e)))?;

        debug!(records = payload.exchange_rate.len(), "환율 응답 수신");
        Ok(payload)
    }
}
