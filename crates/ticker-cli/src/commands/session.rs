//! 대화형 종목 선택 세션.
//!
//! 한 줄 입력이 한 번의 상호작용입니다. 검색 모드에서는 입력이 검색어이고
//! `:pick N` 또는 `:pick 심볼`로 확정합니다. 확정 모드에서는 종가를 한 번
//! 조회해 보여주며, 이후 입력은 확정 값의 수정으로 취급되어 검색 모드로
//! 돌아갑니다. `:quit`으로 종료합니다.

use anyhow::Result;
use std::io::{BufRead, Write};
use ticker_core::{PriceHistoryProvider, SelectionMode, SelectorSession, TickerError};
use tracing::debug;

use super::render::{write_hits, write_history};

const PICK: &str = ":pick";
const QUIT: [&str; 2] = [":quit", ":q"];

/// 입력이 끝나거나 `:quit`을 받을 때까지 세션을 진행합니다.
pub async fn run_session<P, R, W>(
    session: &mut SelectorSession,
    provider: &P,
    input: R,
    out: &mut W,
) -> Result<()>
where
    P: PriceHistoryProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "종목명 또는 티커를 입력하세요. (:pick N 으로 선택, :quit 종료)")?;
    prompt(session, out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if QUIT.contains(&line.trim()) {
            break;
        }

        match session.mode() {
            SelectionMode::Searching => on_searching(session, provider, line, out).await?,
            SelectionMode::Confirmed => on_confirmed(session, line, out)?,
        }
        prompt(session, out)?;
    }

    debug!(mode = %session.mode(), "session finished");
    Ok(())
}

async fn on_searching<P, W>(
    session: &mut SelectorSession,
    provider: &P,
    line: &str,
    out: &mut W,
) -> Result<()>
where
    P: PriceHistoryProvider + ?Sized,
    W: Write,
{
    let choice = match line.strip_prefix(PICK) {
        Some(rest) => rest.trim(),
        None => {
            let hits = session.search(line)?;
            if hits.is_empty() {
                if !line.is_empty() {
                    writeln!(out, "검색 결과 없음")?;
                }
            } else {
                write_hits(out, hits)?;
            }
            return Ok(());
        }
    };

    let picked = match choice.parse::<usize>() {
        Ok(position) => session.choose(position),
        Err(_) => session.choose_text(choice),
    };

    let hit = match picked {
        Ok(hit) => hit,
        Err(e @ TickerError::InvalidSymbolSelected(_)) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(out, "선택: {}", hit.label())?;
    match session.load_history(provider).await {
        Ok(history) => write_history(out, &history)?,
        Err(e @ TickerError::PriceDataUnavailable { .. }) => {
            writeln!(out, "가격 데이터를 불러올 수 없습니다. {}", e)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn on_confirmed<W: Write>(session: &mut SelectorSession, line: &str, out: &mut W) -> Result<()> {
    if session.edit(line)? == SelectionMode::Searching {
        writeln!(out, "선택이 해제되었습니다. 다시 검색하세요.")?;
    }
    Ok(())
}

fn prompt<W: Write>(session: &SelectorSession, out: &mut W) -> Result<()> {
    match session.mode() {
        SelectionMode::Searching => write!(out, "검색> ")?,
        SelectionMode::Confirmed => write!(out, "[{}]> ", session.state().symbol())?,
    }
    out.flush()?;
    Ok(())
}
