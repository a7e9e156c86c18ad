//! Yahoo Finance 종가 이력 제공자.
//!
//! 심볼은 Yahoo 표기를 그대로 사용합니다 (미국은 접미사 없음,
//! 코스피 `.KS`, 코스닥 `.KQ`). 호출마다 새로 조회하며 캐시하지 않습니다.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use ticker_core::{LookbackPeriod, PriceHistoryProvider, PricePoint, ProviderError};
use tracing::debug;

use crate::error::{DataError, Result};

/// Yahoo Finance Provider.
pub struct YahooPriceProvider {
    connector: yahoo_finance_api::YahooConnector,
    interval: String,
}

impl YahooPriceProvider {
    /// 일봉 간격으로 생성합니다.
    pub fn new() -> Result<Self> {
        Self::with_interval("1d")
    }

    /// 캔들 간격(Yahoo interval 문자열)을 지정해 생성합니다.
    pub fn with_interval(interval: impl Into<String>) -> Result<Self> {
        let connector = yahoo_finance_api::YahooConnector::new()
            .map_err(|e| DataError::ConnectionError(format!("Yahoo Finance 연결 실패: {}", e)))?;
        Ok(Self {
            connector,
            interval: interval.into(),
        })
    }
}

#[async_trait]
impl PriceHistoryProvider for YahooPriceProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch_recent_close(
        &self,
        symbol: &str,
        lookback: LookbackPeriod,
    ) -> std::result::Result<Vec<PricePoint>, ProviderError> {
        let range = lookback.to_yahoo_range();
        debug!(symbol, interval = %self.interval, range, "Yahoo Finance API 호출");

        let response = self
            .connector
            .get_quote_range(symbol, &self.interval, range)
            .await
            .map_err(|e| ProviderError::Api(format!("Yahoo Finance API 오류 ({}): {}", symbol, e)))?;

        let quotes = response
            .quotes()
            .map_err(|e| ProviderError::Parse(format!("Quote 파싱 오류 ({}): {}", symbol, e)))?;

        let points = to_price_points(quotes.iter().map(|q| (q.timestamp as i64, q.close)));
        if points.is_empty() {
            return Err(ProviderError::Empty(symbol.to_string()));
        }
        Ok(points)
    }
}

/// `(UTC 타임스탬프, 종가)` 목록을 날짜 오름차순 종가로 변환합니다.
///
/// 타임스탬프가 잘못되었거나 종가가 유한하지 않은 항목은 버립니다.
fn to_price_points(quotes: impl IntoIterator<Item = (i64, f64)>) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = quotes
        .into_iter()
        .filter_map(|(timestamp, close)| {
            let date = Utc.timestamp_opt(timestamp, 0).single()?.date_naive();
            let close = Decimal::from_f64_retain(close)?.round_dp(4);
            Some(PricePoint::new(date, close))
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}
