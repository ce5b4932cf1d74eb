//! # FX Core
//!
//! 일별 환율 조회 시스템의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 날짜 키 (`dd.mm.yyyy`) 및 조회 기간 생성
//! - 통화 코드 정의 (EUR, USD)
//! - API 원본 응답 및 정규화된 환율 구조체
//! - 로깅 인프라

pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;
