//! 대화형 세션 통합 테스트
//!
//! 표준 입력 대신 메모리 버퍼를 넣어 검색 → 선택 → 종가 출력 → 수정 흐름을 확인합니다.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use ticker_cli::commands::history::show_history;
use ticker_cli::commands::session::run_session;
use ticker_core::{
    Catalog, CatalogEntry, LookbackPeriod, Market, PriceHistoryProvider, PricePoint,
    ProviderError, SelectionMode, SelectorSession,
};

/// 테스트용 가격 제공자: `ZZZZ`로 시작하는 심볼은 실패
#[derive(Default)]
struct StubProvider {
    calls: AtomicUsize,
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
        if symbol.starts_with("ZZZZ") {
            return Err(ProviderError::Empty(symbol.to_string()));
        }
        Ok(vec![
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), dec!(110)),
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), dec!(100)),
        ])
    }
}

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::new(vec![
        CatalogEntry::new("삼성전자", "005930.KS", Market::Kospi),
        CatalogEntry::new("엔비디아", "NVDA", Market::Us),
        CatalogEntry::new("없는종목", "ZZZZ_INVALID", Market::Us),
    ]))
}

async fn run(script: &str) -> (String, SelectorSession, usize) {
    let provider = StubProvider::default();
    let mut session = SelectorSession::new(catalog());
    let mut out = Vec::new();
    run_session(&mut session, &provider, Cursor::new(script.to_string()), &mut out)
        .await
        .unwrap();
    let calls = provider.calls.load(Ordering::SeqCst);
    (String::from_utf8(out).unwrap(), session, calls)
}

#[tokio::test]
async fn test_search_pick_and_history() {
    let (out, session, calls) = run("엔비\n:pick 1\n").await;

    assert!(out.contains("  1. 엔비디아 (NVDA)  [US]"));
    assert!(out.contains("선택: 엔비디아 (NVDA)"));
    assert!(out.contains("NVDA 최근 종가 (1mo)"));
    assert!(out.contains("2024-05-01"));
    assert!(out.contains("마지막 종가: 110 (+10.00%)"));
    assert!(out.ends_with("[NVDA]> "));
    assert_eq!(session.mode(), SelectionMode::Confirmed);
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn test_empty_query_shows_nothing() {
    let (out, _, _) = run("\n").await;
    assert!(!out.contains("검색 결과 없음"));
    assert!(!out.contains("1."));
}

#[tokio::test]
async fn test_no_match() {
    let (out, session, _) = run("애플\n").await;
    assert!(out.contains("검색 결과 없음"));
    assert_eq!(session.mode(), SelectionMode::Searching);
}

#[tokio::test]
async fn test_pick_not_offered_prompts() {
    let (out, session, calls) = run("삼성\n:pick NVDA\n:pick 5\n").await;
    assert!(out.contains("목록에서 종목을 선택해 주세요: NVDA"));
    assert!(out.contains("목록에서 종목을 선택해 주세요: 5"));
    assert_eq!(session.mode(), SelectionMode::Searching);
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_price_unavailable_keeps_confirmed() {
    let (out, session, calls) = run("ZZZZ\n:pick ZZZZ_INVALID\n").await;
    assert!(out.contains("가격 데이터를 불러올 수 없습니다."));
    assert!(!out.contains("최근 종가"));
    assert_eq!(session.mode(), SelectionMode::Confirmed);
    assert_eq!(session.state().symbol(), "ZZZZ_INVALID");
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn test_edit_returns_to_search() {
    let (out, session, calls) = run("삼성\n:pick 1\n005930\n삼성\n:quit\n엔비\n").await;
    assert!(out.contains("선택이 해제되었습니다."));
    assert!(out.contains("  1. 삼성전자 (005930.KS)  [KOSPI]"));
    // :quit 이후 입력은 처리하지 않음
    assert!(!out.contains("엔비디아"));
    assert_eq!(session.mode(), SelectionMode::Searching);
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn test_history_command_rejects_unknown_symbol() {
    let provider = StubProvider::default();
    let mut out = Vec::new();
    let err = show_history(catalog(), "AAPL", LookbackPeriod::M1, &provider, &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("AAPL"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    let count = show_history(catalog(), "nvda", LookbackPeriod::M3, &provider, &mut out)
        .await
        .unwrap();
    assert_eq!(count, 2);
    assert!(String::from_utf8(out).unwrap().contains("NVDA 최근 종가 (3mo)"));
}
