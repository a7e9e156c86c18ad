//! 종목 선택 세션의 에러 타입.
//!
//! 이 모듈은 검색/선택/가격 조회 과정에서 사용자에게 보여줄 수 있는
//! 에러를 정의합니다. 어떤 에러도 세션을 종료시키지 않습니다.

use thiserror::Error;

use crate::domain::SelectionMode;

/// 종목 선택 세션 에러.
#[derive(Debug, Error)]
pub enum TickerError {
    /// 현재 상태에서 허용되지 않는 전이
    #[error("잘못된 상태 전이: {mode} 상태에서 {action} 불가")]
    InvalidTransition {
        mode: SelectionMode,
        action: &'static str,
    },

    /// 검색 결과에 없는 입력을 선택
    #[error("목록에서 종목을 선택해 주세요: {0}")]
    InvalidSymbolSelected(String),

    /// 가격 데이터를 가져올 수 없음
    #[error("가격 데이터 없음 ({symbol}): {reason}")]
    PriceDataUnavailable { symbol: String, reason: String },
}

/// 세션 작업을 위한 Result 타입.
pub type TickerResult<T> = Result<T, TickerError>;

impl TickerError {
    /// 사용자에게 목록 재선택을 안내해야 하는 에러인지 확인합니다.
    pub fn is_selection_prompt(&self) -> bool {
        matches!(self, TickerError::InvalidSymbolSelected(_))
    }

    /// 사용자에게 "데이터 없음"으로 표시할 에러인지 확인합니다.
    pub fn is_no_data(&self) -> bool {
        matches!(self, TickerError::PriceDataUnavailable { .. })
    }
}
