//! 단발성 종가 이력 조회.

use anyhow::{bail, Result};
use std::io::Write;
use std::sync::Arc;
use ticker_core::{Catalog, LookbackPeriod, PriceHistoryProvider, SelectorSession, TickerError};

use super::render::write_history;

/// 카탈로그에 있는 심볼의 최근 종가를 조회해 출력합니다.
///
/// 심볼은 세션과 같은 경로(검색 → 선택)로 확정되므로 카탈로그에 없는
/// 심볼은 조회하지 않습니다.
pub async fn show_history<P, W>(
    catalog: Arc<Catalog>,
    symbol: &str,
    lookback: LookbackPeriod,
    provider: &P,
    out: &mut W,
) -> Result<usize>
where
    P: PriceHistoryProvider + ?Sized,
    W: Write,
{
    let mut session = SelectorSession::new(catalog).with_lookback(lookback);
    session.search(symbol)?;

    match session.choose_text(symbol) {
        Ok(_) => {}
        Err(TickerError::InvalidSymbolSelected(_)) => {
            bail!("카탈로그에 없는 심볼입니다: {}", symbol)
        }
        Err(e) => return Err(e.into()),
    }

    let history = session.load_history(provider).await?;
    write_history(out, &history)?;
    Ok(history.points.len())
}
