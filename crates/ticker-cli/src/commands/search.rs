//! 단발성 종목 검색.

use anyhow::Result;
use std::io::Write;
use ticker_core::Catalog;
use tracing::info;

use super::render::{write_hits, write_hits_json, OutputFormat};

/// 카탈로그를 검색해 결과를 출력하고 결과 수를 반환합니다.
pub fn search_symbols<W: Write>(
    catalog: &Catalog,
    query: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let hits = catalog.search(query);
    info!(query, count = hits.len(), "search finished");

    match format {
        OutputFormat::Table if hits.is_empty() => {
            if !query.is_empty() {
                writeln!(out, "검색 결과 없음: {}", query)?;
            }
        }
        OutputFormat::Table => write_hits(out, &hits)?,
        OutputFormat::Json => write_hits_json(out, &hits)?,
    }

    Ok(hits.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticker_core::{CatalogEntry, Market};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("삼성전자", "005930.KS", Market::Kospi),
            CatalogEntry::new("엔비디아", "NVDA", Market::Us),
        ])
    }

    #[test]
    fn test_search_table() {
        let mut out = Vec::new();
        let count = search_symbols(&catalog(), "엔비", OutputFormat::Table, &mut out).unwrap();
        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "  1. 엔비디아 (NVDA)  [US]\n");
    }

    #[test]
    fn test_search_json() {
        let mut out = Vec::new();
        search_symbols(&catalog(), "ks", OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["symbol"], "005930.KS");
        assert_eq!(value[0]["label"], "삼성전자 (005930.KS)");
        assert_eq!(value[0]["market"], "KOSPI");
    }

    #[test]
    fn test_search_empty_query_prints_nothing() {
        let mut out = Vec::new();
        let count = search_symbols(&catalog(), "", OutputFormat::Table, &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }
}
