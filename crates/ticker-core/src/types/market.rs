//! 상장 시장 정의.
//!
//! 카탈로그의 각 종목은 세 시장 중 하나에 속합니다:
//! - `Kospi` - 유가증권시장 (Yahoo 접미사 `.KS`)
//! - `Kosdaq` - 코스닥 (Yahoo 접미사 `.KQ`)
//! - `Us` - 미국 시장 (접미사 없음)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 종목이 상장된 시장.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Market {
    /// 유가증권시장
    Kospi,
    /// 코스닥
    Kosdaq,
    /// 미국 주식 시장 (NYSE/NASDAQ/AMEX)
    Us,
}

impl Market {
    /// 카탈로그 파일에 기록되는 시장 코드를 반환합니다.
    pub fn code(&self) -> &'static str {
        match self {
            Market::Kospi => "KOSPI",
            Market::Kosdaq => "KOSDAQ",
            Market::Us => "US",
        }
    }

    /// Yahoo Finance 심볼 접미사를 반환합니다.
    pub fn yahoo_suffix(&self) -> &'static str {
        match self {
            Market::Kospi => ".KS",
            Market::Kosdaq => ".KQ",
            Market::Us => "",
        }
    }

    /// 종목 코드를 Yahoo Finance 심볼로 변환합니다.
    ///
    /// 한국 종목은 기존 `.KS`/`.KQ` 접미사를 떼고 자기 시장의 접미사를
    /// 붙입니다. 시장 값이 접미사보다 우선합니다.
    ///
    /// ```
    /// use ticker_core::Market;
    ///
    /// assert_eq!(Market::Kospi.to_yahoo_symbol("005930"), "005930.KS");
    /// assert_eq!(Market::Kospi.to_yahoo_symbol("005930.KQ"), "005930.KS");
    /// assert_eq!(Market::Kosdaq.to_yahoo_symbol("247540.KQ"), "247540.KQ");
    /// assert_eq!(Market::Us.to_yahoo_symbol("NVDA"), "NVDA");
    /// ```
    pub fn to_yahoo_symbol(&self, code: &str) -> String {
        let suffix = self.yahoo_suffix();
        if suffix.is_empty() {
            return code.to_string();
        }
        format!("{}{}", strip_korean_suffix(code), suffix)
    }
}

fn strip_korean_suffix(code: &str) -> &str {
    for suffix in [Market::Kospi.yahoo_suffix(), Market::Kosdaq.yahoo_suffix()] {
        let cut = code.len().saturating_sub(suffix.len());
        if let (Some(head), Some(tail)) = (code.get(..cut), code.get(cut..)) {
            if !head.is_empty() && tail.eq_ignore_ascii_case(suffix) {
                return head;
            }
        }
    }
    code
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KOSPI" => Ok(Market::Kospi),
            "KOSDAQ" => Ok(Market::Kosdaq),
            "US" => Ok(Market::Us),
            _ => Err(format!("Unknown market: {}", s)),
        }
    }
}

impl TryFrom<String> for Market {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Market> for String {
    fn from(market: Market) -> Self {
        market.code().to_string()
    }
}
