//! 환율 응답 및 정규화 결과 구조체.
//!
//! - [`RawRatePayload`]: 하루치 API 응답 원본
//! - [`NormalizedEntry`]: 대상 통화만 남긴 날짜별 환율
//!
//! # 응답 예시
//!
//! ```json
//! {
//!   "date": "01.12.2014",
//!   "bank": "PB",
//!   "baseCurrency": 980,
//!   "baseCurrencyLit": "UAH",
//!   "exchangeRate": [
//!     {"baseCurrency": "UAH", "currency": "EUR", "saleRateNB": 18.79,
//!      "purchaseRateNB": 18.79, "saleRate": 20.0, "purchaseRate": 19.2}
//!   ]
//! }
//! ```

use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::{Currency, DateKey};

/// 통화별 환율 레코드.
///
/// 상업 환율(`saleRate`/`purchaseRate`)은 주요 통화에만 제공되며,
/// 국립은행 고시 환율(`*NB`)은 대부분의 통화에 제공됩니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    /// 기준 통화 (예: "UAH")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,

    /// 통화 코드 (예: "EUR", "PLN")
    #[serde(default)]
    pub currency: String,

    /// 은행 매도 환율
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_rate: Option<Decimal>,

    /// 은행 매입 환율
    #[serde(
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_rate: Option<Decimal>,

    /// 국립은행 매도 환율
    #[serde(
        rename = "saleRateNB",
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_rate_nb: Option<Decimal>,

    /// 국립은행 매입 환율
    #[serde(
        rename = "purchaseRateNB",
        default,
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub purchase_rate_nb: Option<Decimal>,
}

impl RateRecord {
    /// 상업 환율로 레코드를 생성합니다.
    pub fn new(currency: impl Into<String>, sale: Decimal, purchase: Decimal) -> Self {
        Self {
            currency: currency.into(),
            sale_rate: Some(sale),
            purchase_rate: Some(purchase),
            ..Default::default()
        }
    }

    /// 국립은행 고시 환율을 설정합니다.
    pub fn with_nb_rates(mut self, sale: Decimal, purchase: Decimal) -> Self {
        self.sale_rate_nb = Some(sale);
        self.purchase_rate_nb = Some(purchase);
        self
    }

    /// 매도/매입 환율 쌍.
    ///
    /// 상업 환율이 없으면 국립은행 환율을 사용하고, 둘 다 없으면 `None`.
    pub fn rate_pair(&self) -> Option<RatePair> {
        let sale = self.sale_rate.or(self.sale_rate_nb)?;
        let purchase = self.purchase_rate.or(self.purchase_rate_nb)?;
        Some(RatePair { sale, purchase })
    }
}

/// 하루치 환율 API 응답 원본.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRatePayload {
    /// 조회 날짜
    pub date: DateKey,

    /// 은행 코드 (예: "PB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,

    /// 기준 통화 문자 코드 (예: "UAH")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency_lit: Option<String>,

    /// 통화별 환율 목록 (API 응답 순서 유지)
    pub exchange_rate: Vec<RateRecord>,
}

impl RawRatePayload {
    pub fn new(date: DateKey, exchange_rate: Vec<RateRecord>) -> Self {
        Self {
            date,
            bank: None,
            base_currency_lit: None,
            exchange_rate,
        }
    }
}

/// 매도/매입 환율 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePair {
    /// 매도 환율
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub sale: Decimal,
    /// 매입 환율
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub purchase: Decimal,
}

/// 대상 통화만 남긴 날짜별 환율.
///
/// `{"01.12.2014": {"EUR": {"sale": 20.0, "purchase": 19.2}}}` 형태의
/// 단일 키 객체로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    /// 조회 날짜
    pub date: DateKey,
    /// 통화별 환율 (대상 통화가 없으면 비어 있음)
    pub rates: BTreeMap<Currency, RatePair>,
}

impl NormalizedEntry {
    /// 빈 환율 맵으로 생성합니다.
    pub fn empty(date: DateKey) -> Self {
        Self {
            date,
            rates: BTreeMap::new(),
        }
    }

    /// 통화 환율 조회.
    pub fn rate(&self, currency: Currency) -> Option<&RatePair> {
        self.rates.get(&currency)
    }
}

impl Serialize for NormalizedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.rates)?;
        map.end()
    }
}
