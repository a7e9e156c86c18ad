//! 종목 검색 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 대화형 세션 (기본)
//! ticker
//!
//! # 종목 검색
//! ticker search 삼성
//! ticker search nvd --format json
//!
//! # 최근 종가 조회 (카탈로그에 있는 심볼만)
//! ticker history 005930.KS --period 3mo
//!
//! # 내장 샘플로 카탈로그 파일 만들기
//! ticker init-catalog -o stocks.json
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ticker_core::{init_logging, AppConfig, Catalog, LookbackPeriod, SelectorSession};
use ticker_data::YahooPriceProvider;
use tracing::info;

use ticker_cli::commands::history::show_history;
use ticker_cli::commands::init_catalog::init_catalog;
use ticker_cli::commands::render::OutputFormat;
use ticker_cli::commands::search::search_symbols;
use ticker_cli::commands::session::run_session;

#[derive(Parser)]
#[command(name = "ticker")]
#[command(about = "국내/미국 종목 검색 및 최근 종가 조회", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = ticker_core::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 카탈로그 파일 경로 (설정값보다 우선)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// 종가 조회 기간 (5d, 1mo, 3mo, 6mo, 1y)
    #[arg(short, long, global = true)]
    period: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 대화형 검색/선택 세션 (기본)
    Session,

    /// 종목명 또는 티커로 검색
    Search {
        /// 검색어 (부분 일치, 대소문자 무시)
        query: String,

        /// 출력 형식 (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// 카탈로그 종목의 최근 종가 조회
    History {
        /// 심볼 (예: 005930.KS, NVDA)
        symbol: String,
    },

    /// 내장 샘플 목록으로 카탈로그 파일 생성
    InitCatalog {
        /// 출력 파일 경로 (기본: 설정의 카탈로그 경로)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 기존 파일 덮어쓰기
        #[arg(long, default_value = "false")]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    init_logging(config.logging.to_log_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let lookback = match cli.period.as_deref() {
        Some(p) => p.parse::<LookbackPeriod>().map_err(anyhow::Error::msg)?,
        None => config.price.lookback,
    };
    let catalog_path = cli.catalog.unwrap_or_else(|| config.catalog.path.clone());

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let catalog = Arc::new(ticker_data::load_catalog(&catalog_path));
            let provider = YahooPriceProvider::with_interval(config.price.interval.clone())?;
            let mut session = SelectorSession::new(catalog).with_lookback(lookback);

            info!(lookback = %lookback, "session started");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut session, &provider, stdin.lock(), &mut stdout).await?;
        }

        Commands::Search { query, format } => {
            let format = OutputFormat::parse(&format)?;
            let catalog = ticker_data::load_catalog(&catalog_path);
            search_symbols(&catalog, &query, format, &mut io::stdout())?;
        }

        Commands::History { symbol } => {
            let catalog: Arc<Catalog> = Arc::new(ticker_data::load_catalog(&catalog_path));
            let provider = YahooPriceProvider::with_interval(config.price.interval.clone())?;
            show_history(catalog, &symbol, lookback, &provider, &mut io::stdout()).await?;
        }

        Commands::InitCatalog { output, force } => {
            let path = output.unwrap_or(catalog_path);
            let count = init_catalog(&path, force)?;
            println!("{}개 종목을 {}에 저장했습니다.", count, path.display());
        }
    }

    Ok(())
}

