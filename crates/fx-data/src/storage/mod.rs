//! 정규화 결과 저장.

pub mod json;
