//! JSON 파일 저장 및 출력용 직렬화.
//!
//! 파일은 4칸 들여쓰기, 표준 출력은 2칸 들여쓰기를 사용합니다.

use fx_core::NormalizedEntry;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use tracing::info;

use crate::error::{DataError, Result};

/// 파일 저장용 들여쓰기
pub const FILE_INDENT: &[u8] = b"    ";

/// 표준 출력용 들여쓰기
pub const STDOUT_INDENT: &[u8] = b"  ";

/// 지정한 들여쓰기로 정규화 결과를 JSON 배열 문자열로 변환합니다.
pub fn to_pretty_json(entries: &[NormalizedEntry], indent: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    entries.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| DataError::SerializationError(e.to_string()))
}

/// 정규화 결과를 파일로 저장합니다. 기존 파일은 덮어씁니다.
pub fn save_to_json(entries: &[NormalizedEntry], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(entries, FILE_INDENT)?;
    std::fs::write(path, json)?;

    info!(path = %path.display(), entries = entries.len(), "환율 파일 저장 완료");
    Ok(())
}
