//! 종목 카탈로그와 부분 문자열 검색.
//!
//! 카탈로그는 프로세스 시작 시 한 번 만들어지고 이후 변경되지 않습니다.
//! 여러 세션이 `Arc<Catalog>`로 잠금 없이 공유합니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::types::Market;

/// 카탈로그 한 항목.
///
/// 소스 파일의 `name_kr`, `ticker`, `market` 키에서 역직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 표시 이름 (예: 삼성전자, 엔비디아)
    #[serde(rename = "name_kr")]
    pub display_name: String,
    /// Yahoo Finance 심볼 (예: 005930.KS, NVDA)
    #[serde(rename = "ticker")]
    pub symbol: String,
    /// 상장 시장
    pub market: Market,
}

impl CatalogEntry {
    pub fn new(display_name: impl Into<String>, symbol: impl Into<String>, market: Market) -> Self {
        Self {
            display_name: display_name.into(),
            symbol: symbol.into(),
            market,
        }
    }

    /// 검색 결과에 표시할 라벨 (`이름 (심볼)`).
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.symbol)
    }

    /// 이름과 심볼이 모두 공백이 아닌지 여부.
    pub fn is_selectable(&self) -> bool {
        !self.display_name.trim().is_empty() && !self.symbol.trim().is_empty()
    }

    fn matches(&self, needle_lower: &str) -> bool {
        self.display_name.to_lowercase().contains(needle_lower)
            || self.symbol.to_lowercase().contains(needle_lower)
    }
}

/// 검색 결과 한 건: `(라벨, 심볼)` 쌍.
///
/// `Catalog::search`만 만들 수 있으므로 선택 상태가 보유한 심볼은
/// 항상 이전 검색 결과에서 온 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    label: String,
    symbol: String,
    market: Market,
}

impl SearchHit {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            label: entry.label(),
            symbol: entry.symbol.clone(),
            market: entry.market,
        }
    }

    /// 사람이 읽는 라벨.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 심볼.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// 시장.
    pub fn market(&self) -> Market {
        self.market
    }

    /// `(라벨, 심볼)` 튜플 형태.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.label, &self.symbol)
    }
}

/// 불변 종목 카탈로그.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// 항목 목록으로 카탈로그를 생성합니다. 순서는 그대로 유지됩니다.
    ///
    /// 이름이나 심볼이 비어 있는 항목은 선택될 수 없으므로 제외합니다.
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        let before = entries.len();
        entries.retain(CatalogEntry::is_selectable);
        if entries.len() < before {
            warn!(dropped = before - entries.len(), "blank catalog entries dropped");
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 시장별 종목 수.
    pub fn count_by_market(&self) -> BTreeMap<Market, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.market).or_insert(0) += 1;
        }
        counts
    }

    /// 이름 또는 심볼에 대한 대소문자 무시 부분 문자열 검색.
    ///
    /// 빈 쿼리는 빈 결과를 반환합니다 (전체 목록을 쏟아내지 않음).
    /// 결과는 카탈로그 순서를 유지하며 순위 매기기나 중복 제거는 하지 않습니다.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.matches(&needle))
            .map(SearchHit::from_entry)
            .collect()
    }
}
