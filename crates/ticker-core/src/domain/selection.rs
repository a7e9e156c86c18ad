//! 검색/확정 2단계 선택 상태 머신.
//!
//! 화면의 같은 자리에 검색창과 확정된 종목 표시를 번갈아 보여주기 위한
//! 상태입니다. UI 계층은 현재 상태를 읽어 해당 위젯을 그리기만 하며,
//! 상태 머신은 어떤 렌더링 프레임워크에도 의존하지 않습니다.
//!
//! # 전이
//!
//! ```text
//!            select(hit)
//! SEARCHING ─────────────▶ CONFIRMED
//!     ▲                        │
//!     └────── edit_or_clear ───┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SearchHit;
use crate::error::{TickerError, TickerResult};

/// 선택 상태의 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMode {
    /// 검색 중 (초기 상태)
    #[default]
    Searching,
    /// 종목 확정
    Confirmed,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Searching => write!(f, "SEARCHING"),
            SelectionMode::Confirmed => write!(f, "CONFIRMED"),
        }
    }
}

/// 세션 하나의 선택 상태.
///
/// 심볼은 `Confirmed`일 때만 존재하므로 "심볼이 비어 있지 않음 ⇔ 확정"
/// 불변식이 타입으로 보장됩니다. 전이 함수는 현재 상태를 빌려 새 상태를
/// 반환하며, 거부된 전이는 호출자의 상태를 건드리지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// 검색 중
    #[default]
    Searching,
    /// 검색 결과 하나가 확정됨
    Confirmed(SearchHit),
}

impl SelectionState {
    /// 세션 시작 상태 (`SEARCHING`, 빈 심볼).
    pub fn new() -> Self {
        Self::Searching
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionState::Searching => SelectionMode::Searching,
            SelectionState::Confirmed(_) => SelectionMode::Confirmed,
        }
    }

    /// 확정된 심볼. 검색 중이면 빈 문자열.
    pub fn symbol(&self) -> &str {
        match self {
            SelectionState::Searching => "",
            SelectionState::Confirmed(hit) => hit.symbol(),
        }
    }

    /// 확정된 검색 결과.
    pub fn confirmed(&self) -> Option<&SearchHit> {
        match self {
            SelectionState::Searching => None,
            SelectionState::Confirmed(hit) => Some(hit),
        }
    }

    /// `SEARCHING → CONFIRMED`: 검색 결과 하나를 확정합니다.
    ///
    /// # Errors
    ///
    /// 이미 확정된 상태에서 호출하면 `TickerError::InvalidTransition`.
    pub fn select(&self, hit: SearchHit) -> TickerResult<SelectionState> {
        match self {
            SelectionState::Searching => {
                tracing::debug!(symbol = hit.symbol(), "selection confirmed");
                Ok(SelectionState::Confirmed(hit))
            }
            SelectionState::Confirmed(_) => Err(TickerError::InvalidTransition {
                mode: self.mode(),
                action: "select",
            }),
        }
    }

    /// `CONFIRMED → SEARCHING`: 확정된 값이 수정되거나 지워지면 검색으로 돌아갑니다.
    ///
    /// 새 값이 비어 있지 않아도 수정 내용은 버립니다. 사용자는 목록에서
    /// 다시 골라야 합니다.
    ///
    /// # Errors
    ///
    /// 검색 중 상태에서 호출하면 `TickerError::InvalidTransition`.
    pub fn edit_or_clear(&self) -> TickerResult<SelectionState> {
        match self {
            SelectionState::Confirmed(hit) => {
                tracing::debug!(previous = hit.symbol(), "selection reset");
                Ok(SelectionState::Searching)
            }
            SelectionState::Searching => Err(TickerError::InvalidTransition {
                mode: self.mode(),
                action: "edit_or_clear",
            }),
        }
    }
}
