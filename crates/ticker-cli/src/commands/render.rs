//! 검색 결과와 종가 이력 출력.

use anyhow::Result;
use std::io::Write;
use ticker_core::{PriceHistory, SearchHit};

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 검색 결과를 번호 목록으로 출력합니다.
pub fn write_hits<W: Write>(out: &mut W, hits: &[SearchHit]) -> Result<()> {
    for (i, hit) in hits.iter().enumerate() {
        writeln!(out, "{:>3}. {}  [{}]", i + 1, hit.label(), hit.market())?;
    }
    Ok(())
}

/// 검색 결과를 JSON 배열로 출력합니다.
pub fn write_hits_json<W: Write>(out: &mut W, hits: &[SearchHit]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, hits)?;
    writeln!(out)?;
    Ok(())
}

/// 종가 이력을 표로 출력합니다.
pub fn write_history<W: Write>(out: &mut W, history: &PriceHistory) -> Result<()> {
    writeln!(out, "{} 최근 종가 ({})", history.symbol, history.lookback)?;
    writeln!(out, "{:-<28}", "")?;
    writeln!(out, "{:<12}{:>16}", "날짜", "종가")?;
    for point in &history.points {
        writeln!(out, "{:<12}{:>16}", point.date.format("%Y-%m-%d").to_string(), point.close)?;
    }
    writeln!(out, "{:-<28}", "")?;

    if let Some(latest) = history.latest() {
        write!(out, "마지막 종가: {}", latest.close)?;
        if let Some(change) = history.change_pct() {
            let sign = if change.is_sign_negative() { "" } else { "+" };
            write!(out, " ({}{:.2}%)", sign, change)?;
        }
        writeln!(out)?;
    }
    if let Some((low, high)) = history.close_range() {
        writeln!(out, "기간 최저/최고: {} / {}", low, high)?;
    }
    Ok(())
}
