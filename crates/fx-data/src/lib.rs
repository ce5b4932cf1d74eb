//! 환율 데이터 조회 및 가공.
//!
//! 이 crate는 다음을 제공합니다:
//! - PrivatBank 환율 API 클라이언트
//! - 날짜별 응답 메모리 캐시 및 동시 조회
//! - 대상 통화(EUR, USD) 정규화
//! - JSON 파일 저장

pub mod cache;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod stats;
pub mod storage;

pub use error::{DataError, Result};

pub use cache::{CachedRateFetcher, RateCache};
pub use normalize::RateNormalizer;
pub use provider::{parse_payload, PrivatBankClient, RateSource};
pub use stats::FetchStats;
pub use storage::json::{save_to_json, to_pretty_json};
