//! 종가 이력 타입.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LookbackPeriod;

/// 하루치 종가.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 거래일
    pub date: NaiveDate,
    /// 종가
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// 확정된 심볼 하나에 대한 종가 이력.
///
/// `points`는 날짜 오름차순이며 비어 있지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    /// 조회한 심볼
    pub symbol: String,
    /// 조회 기간
    pub lookback: LookbackPeriod,
    /// 날짜순 종가
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    /// 가장 최근 종가.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// 기간 첫 종가 대비 마지막 종가 변화율 (%).
    pub fn change_pct(&self) -> Option<Decimal> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if first.close.is_zero() {
            return None;
        }
        Some(((last.close - first.close) / first.close * Decimal::ONE_HUNDRED).round_dp(2))
    }

    /// 기간 내 최고/최저 종가.
    pub fn close_range(&self) -> Option<(Decimal, Decimal)> {
        let mut closes = self.points.iter().map(|p| p.close);
        let first = closes.next()?;
        Some(closes.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }
}
