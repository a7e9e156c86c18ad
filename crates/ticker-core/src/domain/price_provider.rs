//! 가격 이력 제공자 추상화.
//!
//! 확정된 심볼의 최근 종가를 외부 시계열 데이터 제공자로부터 조회하기 위한
//! 인터페이스입니다. 구현체는 `ticker-data` 크레이트에 있습니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{LookbackPeriod, PricePoint};

// =============================================================================
// 에러 타입
// =============================================================================

/// PriceHistoryProvider 에러.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 네트워크 에러
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// API 에러 (존재하지 않는 심볼 등)
    #[error("API 에러: {0}")]
    Api(String),

    /// 파싱 에러
    #[error("파싱 에러: {0}")]
    Parse(String),

    /// 응답은 성공했지만 데이터가 없음
    #[error("데이터 없음: {0}")]
    Empty(String),
}

// =============================================================================
// PriceHistoryProvider Trait
// =============================================================================

/// 가격 이력 제공자 trait.
///
/// 세션은 확정된 심볼마다 `fetch_recent_close`를 한 번 호출합니다.
/// 재시도와 캐싱은 하지 않습니다.
///
/// # 구현 예시
///
/// ```ignore
/// pub struct YahooPriceProvider {
///     connector: yahoo_finance_api::YahooConnector,
/// }
///
/// #[async_trait]
/// impl PriceHistoryProvider for YahooPriceProvider {
///     fn name(&self) -> &str {
///         "yahoo"
///     }
///
///     async fn fetch_recent_close(
///         &self,
///         symbol: &str,
///         lookback: LookbackPeriod,
///     ) -> Result<Vec<PricePoint>, ProviderError> {
///         // Yahoo Finance 호출 및 변환
///     }
/// }
/// ```
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// 제공자 이름 (로깅용).
    fn name(&self) -> &str;

    /// 최근 종가 이력 조회.
    ///
    /// # Returns
    ///
    /// 날짜 오름차순 종가 목록. 데이터가 없으면 빈 벡터 또는 `ProviderError::Empty`.
    ///
    /// # Errors
    ///
    /// - `ProviderError::Network`: 네트워크 연결 실패
    /// - `ProviderError::Api`: 제공자 API 에러
    /// - `ProviderError::Parse`: 응답 파싱 실패
    async fn fetch_recent_close(
        &self,
        symbol: &str,
        lookback: LookbackPeriod,
    ) -> Result<Vec<PricePoint>, ProviderError>;
}
