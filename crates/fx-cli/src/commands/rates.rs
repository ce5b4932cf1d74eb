//! 최근 N일 환율 조회 명령어.
//!
//! 날짜 목록 생성 → 캐시 기반 동시 조회 → 정규화 → 파일 저장 순으로 실행합니다.
//! 표준 출력은 호출자(main)가 담당합니다.

use anyhow::{Context, Result};
use fx_core::{trailing_dates, CoreError, CoreResult, DateKey, DayCount, NormalizedEntry};
use fx_data::storage::json::STDOUT_INDENT;
use fx_data::{save_to_json, to_pretty_json, CachedRateFetcher, PrivatBankClient, RateNormalizer};
use tracing::info;

use crate::config::RatesConfig;

/// 조회 일수 인자가 잘못되었을 때 출력하는 메시지
pub const USAGE_ERROR: &str = "Error: argument must be number betweeen 1-10";

/// 위치 인자에서 조회 일수 파싱. 인자가 없으면 1일, 두 개 이상이면 오류.
pub fn parse_days<S: AsRef<str>>(args: &[S]) -> CoreResult<DayCount> {
    match args {
        [] => Ok(DayCount::default()),
        [raw] => raw.as_ref().parse(),
        _ => Err(CoreError::InvalidDayCount(
            args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" "),
        )),
    }
}

/// 오늘부터 `days`일간의 환율을 조회하고 파일로 저장합니다.
pub async fn run_rates(config: &RatesConfig, days: DayCount) -> Result<Vec<NormalizedEntry>> {
    run_rates_from(config, DateKey::today(), days).await
}

/// `anchor` 날짜부터 거슬러 `days`일간의 환율을 조회하고 파일로 저장합니다.
pub async fn run_rates_from(
    config: &RatesConfig,
    anchor: DateKey,
    days: DayCount,
) -> Result<Vec<NormalizedEntry>> {
    let dates = trailing_dates(anchor, days);
    info!(days = %days, anchor = %anchor, api_url = %config.api_url, "환율 조회 시작");

    let client = PrivatBankClient::with_config(config.api_url.as_str(), config.request_timeout())
        .context("HTTP 클라이언트 생성 실패")?;
    let mut fetcher = CachedRateFetcher::new(client);

    let payloads = fetcher
        .fetch_rates(&dates)
        .await
        .context("환율 조회 실패")?;

    let entries = RateNormalizer::default().normalize(&payloads);

    save_to_json(&entries, &config.output_file)
        .with_context(|| format!("파일 저장 실패: {}", config.output_file.display()))?;

    Ok(entries)
}

/// 표준 출력용 JSON (2칸 들여쓰기).
pub fn render_stdout(entries: &[NormalizedEntry]) -> Result<String> {
    to_pretty_json(entries, STDOUT_INDENT).context("JSON 직렬화 실패")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        let none: [&str; 0] = [];
        assert_eq!(parse_days(&none).unwrap().get(), 1);
        assert_eq!(parse_days(&["1"]).unwrap().get(), 1);
        assert_eq!(parse_days(&["10"]).unwrap().get(), 10);

        for bad in ["0", "11", "-3", "abc", "", "3.5", "1e1"] {
            let err = parse_days(&[bad]).unwrap_err();
            assert!(err.is_usage_error(), "{} should be a usage error", bad);
        }
    }

    #[test]
    fn test_parse_days_rejects_extra_arguments() {
        let err = parse_days(&["3", "4"]).unwrap_err();
        assert!(err.is_usage_error());
        assert_eq!(err, CoreError::InvalidDayCount("3 4".to_string()));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_stdout(&[]).unwrap(), "[]");
    }
}
