//! 사용자 세션 하나의 검색/선택/가격 조회 흐름.
//!
//! 세션은 공유 카탈로그, 자신의 `SelectionState`, 그리고 가장 최근
//! 검색에서 제시한 결과 목록을 소유합니다. 사용자가 고를 수 있는 것은
//! 제시된 결과뿐이며, 가격 조회는 확정 상태에서만 가능합니다.

use std::sync::Arc;

use tracing::{debug, info, warn, Instrument};

use super::{Catalog, PriceHistoryProvider, SearchHit, SelectionMode, SelectionState};
use crate::error::{TickerError, TickerResult};
use crate::types::{LookbackPeriod, PriceHistory};

/// 종목 선택 세션.
#[derive(Debug, Clone)]
pub struct SelectorSession {
    catalog: Arc<Catalog>,
    state: SelectionState,
    offered: Vec<SearchHit>,
    lookback: LookbackPeriod,
}

impl SelectorSession {
    /// 검색 상태로 새 세션을 시작합니다.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: SelectionState::new(),
            offered: Vec::new(),
            lookback: LookbackPeriod::default(),
        }
    }

    /// 가격 조회 기간을 설정합니다.
    pub fn with_lookback(mut self, lookback: LookbackPeriod) -> Self {
        self.lookback = lookback;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn mode(&self) -> SelectionMode {
        self.state.mode()
    }

    pub fn lookback(&self) -> LookbackPeriod {
        self.lookback
    }

    /// 가장 최근 검색에서 제시한 결과.
    pub fn offered(&self) -> &[SearchHit] {
        &self.offered
    }

    /// 카탈로그를 검색하고 결과를 선택 후보로 제시합니다.
    pub fn search(&mut self, query: &str) -> TickerResult<&[SearchHit]> {
        self.require(SelectionMode::Searching, "search")?;

        self.offered = self.catalog.search(query);
        debug!(query, hits = self.offered.len(), "catalog searched");
        Ok(self.offered.as_slice())
    }

    /// 제시된 결과 중 `position`번째(1부터)를 확정합니다.
    pub fn choose(&mut self, position: usize) -> TickerResult<SearchHit> {
        self.require(SelectionMode::Searching, "choose")?;

        let hit = position
            .checked_sub(1)
            .and_then(|idx| self.offered.get(idx))
            .cloned()
            .ok_or_else(|| TickerError::InvalidSymbolSelected(position.to_string()))?;
        self.confirm(hit)
    }

    /// 제시된 결과 중 라벨 또는 심볼이 일치하는 항목을 확정합니다.
    ///
    /// 목록에 없는 자유 입력은 `InvalidSymbolSelected`로 거부됩니다.
    pub fn choose_text(&mut self, input: &str) -> TickerResult<SearchHit> {
        self.require(SelectionMode::Searching, "choose")?;

        let input = input.trim();
        if input.is_empty() {
            return Err(TickerError::InvalidSymbolSelected(String::new()));
        }

        let wanted = input.to_lowercase();
        let hit = self
            .offered
            .iter()
            .find(|h| h.label() == input)
            .or_else(|| self.offered.iter().find(|h| h.symbol().to_lowercase() == wanted))
            .cloned()
            .ok_or_else(|| TickerError::InvalidSymbolSelected(input.to_string()))?;
        self.confirm(hit)
    }

    /// 확정된 값을 사용자가 수정했을 때 호출합니다.
    ///
    /// 값이 그대로면 아무 일도 일어나지 않습니다. 지우거나 다른 값으로
    /// 바꾸면 수정 내용은 버리고 검색 상태로 돌아갑니다.
    pub fn edit(&mut self, text: &str) -> TickerResult<SelectionMode> {
        if let SelectionState::Confirmed(hit) = &self.state {
            if text == hit.symbol() || text == hit.label() {
                return Ok(SelectionMode::Confirmed);
            }
        }

        self.state = self.state.edit_or_clear()?;
        self.offered.clear();
        Ok(self.state.mode())
    }

    /// 확정된 값을 지웁니다.
    pub fn clear(&mut self) -> TickerResult<SelectionMode> {
        self.edit("")
    }

    /// 확정된 심볼의 최근 종가를 한 번 조회합니다.
    ///
    /// 실패하거나 빈 결과면 `PriceDataUnavailable`을 반환하며 상태는
    /// `CONFIRMED`로 유지됩니다. 재시도나 캐싱은 하지 않습니다.
    pub async fn load_history<P>(&self, provider: &P) -> TickerResult<PriceHistory>
    where
        P: PriceHistoryProvider + ?Sized,
    {
        self.require(SelectionMode::Confirmed, "load_history")?;
        let symbol = self.state.symbol().to_string();

        info!(
            provider = provider.name(),
            symbol = %symbol,
            lookback = %self.lookback,
            "fetching recent closes"
        );

        let span = crate::selection_span!("load_history", symbol, self.lookback);
        let fetched = provider
            .fetch_recent_close(&symbol, self.lookback)
            .instrument(span)
            .await;

        let mut points = match fetched {
            Ok(points) => points,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "price fetch failed");
                return Err(TickerError::PriceDataUnavailable {
                    symbol,
                    reason: e.to_string(),
                });
            }
        };

        if points.is_empty() {
            warn!(symbol = %symbol, "price provider returned no data");
            return Err(TickerError::PriceDataUnavailable {
                symbol,
                reason: "빈 응답".to_string(),
            });
        }

        points.sort_by_key(|p| p.date);
        Ok(PriceHistory {
            symbol,
            lookback: self.lookback,
            points,
        })
    }

    fn confirm(&mut self, hit: SearchHit) -> TickerResult<SearchHit> {
        self.state = self.state.select(hit.clone())?;
        self.offered.clear();
        info!(symbol = hit.symbol(), label = hit.label(), "symbol confirmed");
        Ok(hit)
    }

    fn require(&self, mode: SelectionMode, action: &'static str) -> TickerResult<()> {
        if self.state.mode() == mode {
            Ok(())
        } else {
            Err(TickerError::InvalidTransition {
                mode: self.state.mode(),
                action,
            })
        }
    }
}
