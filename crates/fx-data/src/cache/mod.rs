//! 캐싱 레이어.
//!
//! - [`RateCache`]: 실행 단위 날짜별 응답 캐시 (만료/영속화 없음)
//! - [`CachedRateFetcher`]: 캐시 우선 조회 + 미스 날짜 동시 조회

pub mod rates;

pub use rates::{CachedRateFetcher, RateCache};
