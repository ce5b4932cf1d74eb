//! 환율 조회 CLI.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 환경변수 기반 설정
//! - 조회 일수 검증
//! - 조회 → 정규화 → 파일 저장 파이프라인

pub mod commands;
pub mod config;

pub use config::RatesConfig;
