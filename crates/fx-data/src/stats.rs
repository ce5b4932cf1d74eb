//! 조회 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 환율 조회 작업 통계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchStats {
    /// 요청된 날짜 수
    pub requested: usize,
    /// 캐시에서 바로 응답한 날짜 수
    pub cache_hits: usize,
    /// 네트워크로 새로 가져온 날짜 수
    pub fetched: usize,
    /// 실패한 요청 수
    pub errors: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl FetchStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 캐시 적중률 계산 (%)
    pub fn hit_rate(&self) -> f64 {
        if self.requested == 0 {
            0.0
        } else {
            (self.cache_hits as f64 / self.requested as f64) * 100.0
        }
    }

    /// 다른 배치의 통계를 누적합니다.
    pub fn merge(&mut self, other: &FetchStats) {
        self.requested += other.requested;
        self.cache_hits += other.cache_hits;
        self.fetched += other.fetched;
        self.errors += other.errors;
        self.elapsed += other.elapsed;
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            requested = self.requested,
            cache_hits = self.cache_hits,
            fetched = self.fetched,
            errors = self.errors,
            hit_rate = format!("{:.1}%", self.hit_rate()),
            elapsed = format!("{:.2}s", self.elapsed.as_secs_f64()),
            "조회 완료"
        );
    }
}
