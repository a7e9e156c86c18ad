//! 설정 관리.
//!
//! 기본값 → 설정 파일(TOML, 선택) → `TICKER__` 접두사 환경 변수 순으로
//! 덮어씁니다. 예: `TICKER__CATALOG__PATH=data/stocks.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::{LogConfig, LogFormat};
use crate::types::LookbackPeriod;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 카탈로그 설정
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// 가격 조회 설정
    #[serde(default)]
    pub price: PriceConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 카탈로그 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// 종목 목록 JSON 파일 경로
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("stocks.json"),
        }
    }
}

/// 가격 조회 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceConfig {
    /// 조회 기간
    #[serde(default)]
    pub lookback: LookbackPeriod,
    /// 캔들 간격 (Yahoo interval)
    #[serde(default = "default_interval")]
    pub interval: String,
}

fn default_interval() -> String {
    "1d".to_string()
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            lookback: LookbackPeriod::default(),
            interval: default_interval(),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl LoggingConfig {
    /// 로깅 초기화용 설정으로 변환합니다. 알 수 없는 형식은 compact로 처리합니다.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig::new(self.level.clone())
            .with_format(self.format.parse().unwrap_or(LogFormat::Compact))
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("catalog.path", "stocks.json")?
            .set_default("price.lookback", "1mo")?
            .set_default("price.interval", "1d")?
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "compact")?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("TICKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.path, PathBuf::from("stocks.json"));
        assert_eq!(config.price.lookback, LookbackPeriod::M1);
        assert_eq!(config.price.interval, "1d");
        assert_eq!(config.logging.to_log_config().format, LogFormat::Compact);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.price.lookback, LookbackPeriod::M1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticker.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[catalog]\npath = \"data/stocks.json\"\n\n[price]\nlookback = \"3mo\"\n\n[logging]\nlevel = \"debug\"\nformat = \"json\""
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("data/stocks.json"));
        assert_eq!(config.price.lookback, LookbackPeriod::M3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.to_log_config().format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides_log_format() {
        // 파일 기반 테스트와 같은 값을 써서 병렬 실행 시에도 결과가 같도록 함
        std::env::set_var("TICKER__LOGGING__FORMAT", "json");
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        std::env::remove_var("TICKER__LOGGING__FORMAT");

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.to_log_config().format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_lookback_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticker.toml");
        std::fs::write(&path, "[price]\nlookback = \"2w\"\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}
