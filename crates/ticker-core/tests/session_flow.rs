//! 선택 세션 통합 테스트
//!
//! 검색 → 확정 → 가격 조회 → 수정 흐름을 네트워크 없이 메모리 제공자로 검증합니다.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use ticker_core::{
    Catalog, CatalogEntry, LookbackPeriod, Market, PriceHistoryProvider, PricePoint,
    ProviderError, SelectionMode, SelectorSession, TickerError,
};

/// 테스트용 가격 제공자
struct StubProvider {
    calls: AtomicUsize,
    response: fn(&str) -> Result<Vec<PricePoint>, ProviderError>,
}

impl StubProvider {
    fn new(response: fn(&str) -> Result<Vec<PricePoint>, ProviderError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceHistoryProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_recent_close(
        &self,
        symbol: &str,
        _lookback: LookbackPeriod,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.response)(symbol)
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

fn closes(_: &str) -> Result<Vec<PricePoint>, ProviderError> {
    // 일부러 역순으로 반환
    Ok(vec![
        PricePoint::new(day(3), dec!(905.5)),
        PricePoint::new(day(2), dec!(880.0)),
        PricePoint::new(day(1), dec!(858.2)),
    ])
}

fn session() -> SelectorSession {
    let catalog = Catalog::new(vec![
        CatalogEntry::new("삼성전자", "005930.KS", Market::Kospi),
        CatalogEntry::new("엔비디아", "NVDA", Market::Us),
    ]);
    SelectorSession::new(Arc::new(catalog))
}

#[tokio::test]
async fn test_confirm_and_load_history() {
    let provider = StubProvider::new(closes);
    let mut s = session();

    s.search("엔비").unwrap();
    let hit = s.choose(1).unwrap();
    assert_eq!(hit.as_pair(), ("엔비디아 (NVDA)", "NVDA"));

    let history = s.load_history(&provider).await.unwrap();
    assert_eq!(history.symbol, "NVDA");
    assert_eq!(history.lookback, LookbackPeriod::M1);
    assert_eq!(history.points.first().map(|p| p.date), Some(day(1)));
    assert_eq!(history.latest().map(|p| p.close), Some(dec!(905.5)));
    assert_eq!(provider.calls(), 1);

    assert_eq!(s.clear().unwrap(), SelectionMode::Searching);
    assert_eq!(s.state().symbol(), "");
}

#[tokio::test]
async fn test_invalid_symbol_failure_keeps_confirmed() {
    let provider = StubProvider::new(|symbol| {
        Err(ProviderError::Api(format!("No data found, symbol may be delisted: {}", symbol)))
    });

    let catalog = Catalog::new(vec![CatalogEntry::new("없는종목", "ZZZZ_INVALID", Market::Us)]);
    let mut s = SelectorSession::new(Arc::new(catalog)).with_lookback(LookbackPeriod::M1);
    s.search("ZZZZ").unwrap();
    s.choose(1).unwrap();

    let err = s.load_history(&provider).await.unwrap_err();
    assert!(matches!(err, TickerError::PriceDataUnavailable { ref symbol, .. } if symbol == "ZZZZ_INVALID"));
    assert_eq!(s.mode(), SelectionMode::Confirmed);
    assert_eq!(s.state().symbol(), "ZZZZ_INVALID");
    // 재시도 없음
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_empty_series_is_unavailable() {
    let provider = StubProvider::new(|_| Ok(Vec::new()));
    let mut s = session();
    s.search("삼성").unwrap();
    s.choose_text("005930.KS").unwrap();

    let err = s.load_history(&provider).await.unwrap_err();
    assert!(err.is_no_data());
    assert_eq!(s.mode(), SelectionMode::Confirmed);
}

#[tokio::test]
async fn test_history_requires_confirmed() {
    let provider = StubProvider::new(closes);
    let s = session();

    let err = s.load_history(&provider).await.unwrap_err();
    assert!(matches!(err, TickerError::InvalidTransition { mode: SelectionMode::Searching, .. }));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_each_confirm_fetches_again() {
    let provider = StubProvider::new(closes);
    let mut s = session();

    for query in ["엔비", "삼성", "엔비"] {
        s.search(query).unwrap();
        s.choose(1).unwrap();
        s.load_history(&provider).await.unwrap();
        s.edit("").unwrap();
    }
    assert_eq!(provider.calls(), 3);
}
