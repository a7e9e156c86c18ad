//! 종목 목록 파일 로딩.
//!
//! 소스 파일은 `ticker`, `name_kr`, `market` 키를 가진 JSON 객체 배열입니다.
//!
//! ```json
//! [
//!     { "ticker": "005930.KS", "name_kr": "삼성전자", "market": "KOSPI" },
//!     { "ticker": "NVDA", "name_kr": "엔비디아", "market": "US" }
//! ]
//! ```
//!
//! 잘못된 레코드는 건너뛰고 나머지를 사용합니다. 파일이 없거나 유효한
//! 레코드가 하나도 없으면 내장 샘플 목록을 사용하며, 실패는 경고 로그로만
//! 남기고 호출자에게 전달하지 않습니다.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use ticker_core::{Catalog, CatalogEntry, Market};
use tracing::{debug, info, warn};

use crate::error::{DataError, Result};

/// 카탈로그 파일을 읽을 수 없을 때 사용하는 내장 샘플 목록.
pub fn builtin_sample() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("삼성전자", "005930.KS", Market::Kospi),
        CatalogEntry::new("SK하이닉스", "000660.KS", Market::Kospi),
        CatalogEntry::new("에코프로비엠", "247540.KQ", Market::Kosdaq),
        CatalogEntry::new("애플", "AAPL", Market::Us),
        CatalogEntry::new("엔비디아", "NVDA", Market::Us),
        CatalogEntry::new("테슬라", "TSLA", Market::Us),
    ]
}

/// 카탈로그 파일을 엄격하게 읽습니다.
///
/// 레코드는 하나씩 검증하며, 지원하지 않는 시장(KONEX 등)이거나 이름/심볼이
/// 비어 있는 레코드는 건너뜁니다. JSON 배열이 아니거나 유효한 레코드가
/// 하나도 없으면 에러를 반환합니다.
///
/// 한국 종목 코드의 Yahoo 접미사는 시장에 맞게 정규화합니다.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))?;

    let total = records.len();
    let mut entries = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        match parse_record(record) {
            Ok(entry) => entries.push(entry),
            Err(e) => debug!(index, error = %e, "catalog record skipped"),
        }
    }

    let skipped = total - entries.len();
    if skipped > 0 {
        warn!(
            path = %path.display(),
            skipped,
            kept = entries.len(),
            "invalid catalog records skipped"
        );
    }
    if total > 0 && entries.is_empty() {
        return Err(DataError::Parse(format!(
            "유효한 종목 레코드가 없습니다 ({}건 모두 무효)",
            total
        )));
    }
    Ok(entries)
}

fn parse_record(record: serde_json::Value) -> Result<CatalogEntry> {
    let mut entry: CatalogEntry = serde_json::from_value(record)?;
    entry.display_name = entry.display_name.trim().to_string();
    let code = entry.symbol.trim().to_string();
    if entry.display_name.is_empty() || code.is_empty() {
        return Err(DataError::Parse("종목명 또는 심볼이 비어 있습니다".to_string()));
    }
    entry.symbol = entry.market.to_yahoo_symbol(&code);
    Ok(entry)
}

/// 카탈로그 파일을 읽습니다. 실패하거나 비어 있으면 내장 샘플을 반환합니다.
pub fn load(path: impl AsRef<Path>) -> Vec<CatalogEntry> {
    let path = path.as_ref();
    match load_from_path(path) {
        Ok(entries) if !entries.is_empty() => {
            info!(path = %path.display(), count = entries.len(), "catalog loaded");
            entries
        }
        Ok(_) => {
            warn!(path = %path.display(), "catalog file is empty, using built-in sample");
            builtin_sample()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "catalog load failed, using built-in sample");
            builtin_sample()
        }
    }
}

/// `load` 결과로 카탈로그를 만듭니다.
pub fn load_catalog(path: impl AsRef<Path>) -> Catalog {
    let catalog = Catalog::new(load(path));
    for (market, count) in catalog.count_by_market() {
        info!(%market, count, "catalog entries");
    }
    catalog
}

/// 카탈로그를 소스 파일 형식(4칸 들여쓰기 JSON)으로 저장합니다.
pub fn write_catalog(path: impl AsRef<Path>, entries: &[CatalogEntry]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    entries.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
