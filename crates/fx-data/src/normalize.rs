//! 환율 응답 정규화.
//!
//! API 응답에서 대상 통화(기본: EUR, USD)의 매도/매입 환율만 남깁니다.
//! 기준 통화, 은행 코드 등 나머지 필드는 버립니다.

use fx_core::{Currency, NormalizedEntry, RawRatePayload};
use tracing::{debug, warn};

/// 대상 통화 기준 정규화기.
#[derive(Debug, Clone)]
pub struct RateNormalizer {
    currencies: Vec<Currency>,
}

impl Default for RateNormalizer {
    fn default() -> Self {
        Self {
            currencies: Currency::ALL.to_vec(),
        }
    }
}

impl RateNormalizer {
    /// 대상 통화를 지정하여 생성합니다.
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Self {
        Self {
            currencies: currencies.into_iter().collect(),
        }
    }

    /// 응답 목록을 같은 순서의 정규화 결과로 변환합니다.
    pub fn normalize(&self, payloads: &[RawRatePayload]) -> Vec<NormalizedEntry> {
        payloads.iter().map(|p| self.normalize_one(p)).collect()
    }

    /// 하루치 응답을 정규화합니다.
    ///
    /// 대상 통화가 하나도 없어도 빈 맵으로 결과를 만듭니다.
    pub fn normalize_one(&self, payload: &RawRatePayload) -> NormalizedEntry {
        let mut entry = NormalizedEntry::empty(payload.date);

        for record in &payload.exchange_rate {
            let Some(currency) = Currency::from_code(&record.currency) else {
                continue;
            };
            if !self.currencies.contains(&currency) {
                continue;
            }

            match record.rate_pair() {
                Some(pair) => {
                    entry.rates.insert(currency, pair);
                }
                None => {
                    warn!(
                        date = %payload.date,
                        currency = %currency,
                        "매도/매입 환율 없음, 건너뜀"
                    );
                }
            }
        }

        if entry.rates.is_empty() {
            debug!(date = %payload.date, "대상 통화 없음");
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_core::{DateKey, RatePair, RateRecord};
    use rust_decimal_macros::dec;

    fn date() -> DateKey {
        DateKey::from_ymd(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_drops_other_currencies() {
        let payload = RawRatePayload::new(
            date(),
            vec![
                RateRecord::new("EUR", dec!(28), dec!(27)),
                RateRecord::new("USD", dec!(30), dec!(29)),
                RateRecord::new("PLN", dec!(8), dec!(7.8)),
            ],
        );

        let entry = RateNormalizer::default().normalize_one(&payload);

        assert_eq!(entry.date, date());
        assert_eq!(entry.rates.len(), 2);
        assert_eq!(entry.rate(Currency::Eur), Some(&RatePair { sale: dec!(28), purchase: dec!(27) }));
        assert_eq!(entry.rate(Currency::Usd), Some(&RatePair { sale: dec!(30), purchase: dec!(29) }));

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "05.01.2024": {
                    "EUR": {"sale": 28, "purchase": 27},
                    "USD": {"sale": 30, "purchase": 29}
                }
            })
        );
    }

    #[test]
    fn test_no_configured_currency_yields_empty_entry() {
        let payload = RawRatePayload::new(
            date(),
            vec![
                RateRecord::new("PLN", dec!(8), dec!(7.8)),
                RateRecord::new("GBP", dec!(50), dec!(49)),
            ],
        );

        let entries = RateNormalizer::default().normalize(&[payload]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, date());
        assert!(entries[0].rates.is_empty());
    }

    #[test]
    fn test_keeps_payload_order() {
        let dates = [
            DateKey::from_ymd(2024, 1, 5).unwrap(),
            DateKey::from_ymd(2024, 1, 4).unwrap(),
            DateKey::from_ymd(2024, 1, 3).unwrap(),
        ];
        let payloads: Vec<_> = dates
            .iter()
            .map(|d| RawRatePayload::new(*d, vec![RateRecord::new("USD", dec!(38), dec!(37.5))]))
            .collect();

        let entries = RateNormalizer::default().normalize(&payloads);

        let keys: Vec<DateKey> = entries.iter().map(|e| e.date).collect();
        assert_eq!(keys, dates);
    }

    #[test]
    fn test_nb_fallback_and_missing_rates() {
        let payload = RawRatePayload::new(
            date(),
            vec![
                RateRecord {
                    currency: "EUR".to_string(),
                    sale_rate_nb: Some(dec!(41.2)),
                    purchase_rate_nb: Some(dec!(41.2)),
                    ..Default::default()
                },
                RateRecord {
                    currency: "USD".to_string(),
                    ..Default::default()
                },
            ],
        );

        let entry = RateNormalizer::default().normalize_one(&payload);

        assert_eq!(entry.rate(Currency::Eur), Some(&RatePair { sale: dec!(41.2), purchase: dec!(41.2) }));
        assert_eq!(entry.rate(Currency::Usd), None);
    }

    #[test]
    fn test_restricted_currency_set() {
        let payload = RawRatePayload::new(
            date(),
            vec![
                RateRecord::new("EUR", dec!(28), dec!(27)),
                RateRecord::new("USD", dec!(30), dec!(29)),
            ],
        );

        let entry = RateNormalizer::new([Currency::Usd]).normalize_one(&payload);

        assert_eq!(entry.rates.keys().copied().collect::<Vec<_>>(), vec![Currency::Usd]);
    }
}
