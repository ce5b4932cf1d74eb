//! 환율 조회 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 오늘 EUR/USD 환율
//! fx-rates
//!
//! # 최근 5일 환율, 결과 파일 지정
//! fx-rates 5 --output data/rates.json
//!
//! # JSON 로그로 실행
//! fx-rates 3 --log-format json --log-level debug
//! ```

use clap::Parser;
use fx_cli::commands::rates::{parse_days, render_stdout, run_rates, USAGE_ERROR};
use fx_cli::RatesConfig;
use fx_core::logging::{init_logging, LogConfig, LogFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fx-rates")]
#[command(about = "PrivatBank EUR/USD 환율 조회 (최근 1-10일)", long_about = None)]
#[command(version)]
struct Cli {
    /// 조회할 일수 (1-10, 기본: 1)
    #[arg(allow_hyphen_values = true)]
    days: Option<String>,

    /// 추가 위치 인자 (있으면 사용법 오류)
    #[arg(hide = true)]
    extra: Vec<String>,

    /// 결과 저장 파일 (기본: RATES_OUTPUT_FILE 또는 currency.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 환율 API URL (기본: PRIVATBANK_API_URL 또는 PrivatBank 아카이브 API)
    #[arg(long)]
    api_url: Option<String>,

    /// 요청당 타임아웃 (초)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// 로그 레벨 (trace, debug, info, warn, error). 기본: RUST_LOG 또는 info
    #[arg(long)]
    log_level: Option<String>,

    /// 로그 형식 (pretty, json, compact). 기본: LOG_FORMAT 또는 compact
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 네트워크 요청 전에 인자 검증
    let args: Vec<&str> = cli
        .days
        .as_deref()
        .into_iter()
        .chain(cli.extra.iter().map(String::as_str))
        .collect();
    let days = match parse_days(&args) {
        Ok(days) => days,
        Err(_) => {
            println!("{}", USAGE_ERROR);
            std::process::exit(1);
        }
    };

    let mut config = RatesConfig::from_env();
    if let Some(output) = cli.output {
        config = config.with_output_file(output);
    }
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }

    // .env 로드 이후에 읽어야 LOG_FORMAT 등이 반영됨
    let mut log_config = LogConfig::from_env();
    if let Some(level) = cli.log_level {
        log_config.level = level;
    }
    if let Some(format) = cli.log_format {
        log_config = log_config.with_format(format);
    }
    init_logging(log_config)?;

    tracing::debug!(?config, "설정 로드 완료");

    let entries = run_rates(&config, days).await?;
    println!("{}", render_stdout(&entries)?);

    Ok(())
}
