//! 캐시 기반 환율 조회.
//!
//! 과거 날짜의 환율은 변하지 않으므로 한 번 받은 응답은 실행이 끝날 때까지
//! 그대로 사용합니다.
//!
//! # 동작 흐름
//!
//! ```text
//! 요청 날짜 목록 (최신순)
//!         │
//!         ▼
//! ┌───────────────────┐
//! │ 1. 캐시 분류        │ ← 적중 / 미스 (중복 날짜는 한 번만)
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼─────────┐
//! │ 2. 미스 날짜 동시 조회 │ ← join_all, 전부 완료될 때까지 대기
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼─────────┐
//! │ 3. 성공 응답 캐시 저장 │ ← 조정 태스크에서만 수정 (Lock 불필요)
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼─────────┐
//! │ 4. 입력 순서대로 반환  │ ← 하나라도 실패하면 첫 번째 에러 반환
//! └─────────────────────┘
//! ```

use futures::future::join_all;
use fx_core::{DateKey, RawRatePayload};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::error::{DataError, Result};
use crate::provider::RateSource;
use crate::stats::FetchStats;

/// 날짜별 환율 응답 캐시.
///
/// 한 번 저장된 날짜는 덮어쓰지 않습니다.
#[derive(Debug, Default)]
pub struct RateCache {
    entries: HashMap<DateKey, RawRatePayload>,
}

impl RateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: &DateKey) -> Option<&RawRatePayload> {
        self.entries.get(date)
    }

    pub fn contains(&self, date: &DateKey) -> bool {
        self.entries.contains_key(date)
    }

    /// 응답을 저장합니다. 이미 있는 날짜면 기존 응답을 유지하고 `false`.
    pub fn insert(&mut self, date: DateKey, payload: RawRatePayload) -> bool {
        if self.entries.contains_key(&date) {
            return false;
        }
        self.entries.insert(date, payload);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 캐시 기반 환율 조회기.
///
/// 같은 날짜에 대해 조회기 수명 동안 최대 한 번만 네트워크 요청을 보냅니다.
pub struct CachedRateFetcher<S: RateSource> {
    source: S,
    cache: RateCache,
    /// 누적 통계
    stats: FetchStats,
}

impl<S: RateSource> CachedRateFetcher<S> {
    /// 빈 캐시로 생성합니다.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RateCache::new(),
            stats: FetchStats::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    /// 생성 이후 누적된 조회 통계.
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// 날짜 목록의 환율 응답을 입력 순서대로 반환합니다.
    ///
    /// 캐시에 없는 날짜는 동시에 요청하고 모두 끝날 때까지 기다립니다.
    /// 하나라도 실패하면 입력 순서상 첫 번째 에러를 반환하며,
    /// 같은 배치에서 성공한 응답은 캐시에 남습니다.
    #[instrument(skip(self, dates), fields(source = self.source.name(), count = dates.len()))]
    pub async fn fetch_rates(&mut self, dates: &[DateKey]) -> Result<Vec<RawRatePayload>> {
        let started = Instant::now();
        let mut batch = FetchStats {
            requested: dates.len(),
            ..Default::default()
        };

        let mut pending: Vec<DateKey> = Vec::new();
        for date in dates {
            if self.cache.contains(date) {
                batch.cache_hits += 1;
            } else if !pending.contains(date) {
                pending.push(*date);
            }
        }

        debug!(
            cache_hits = batch.cache_hits,
            pending = pending.len(),
            "캐시 분류 완료"
        );

        let source = &self.source;
        let results = join_all(
            pending
                .iter()
                .map(|&date| async move { (date, source.fetch_day(date).await) }),
        )
        .await;

        let mut first_error: Option<DataError> = None;
        for (date, result) in results {
            match result {
                Ok(payload) => {
                    if payload.date != date {
                        warn!(
                            requested = %date,
                            received = %payload.date,
                            "응답 날짜가 요청 날짜와 다름, 요청 날짜로 캐시"
                        );
                    }
                    self.cache.insert(date, payload);
                    batch.fetched += 1;
                }
                Err(e) => {
                    warn!(
                        date = %date,
                        error = %e,
                        retryable = e.is_retryable(),
                        "환율 조회 실패"
                    );
                    batch.errors += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        batch.elapsed = started.elapsed();
        self.stats.merge(&batch);

        if let Some(err) = first_error {
            return Err(err);
        }
        batch.log_summary("환율 조회");

        dates
            .iter()
            .map(|date| {
                self.cache
                    .get(date)
                    .cloned()
                    .ok_or_else(|| DataError::CacheMiss(date.to_string()))
            })
            .collect()
    }
}
