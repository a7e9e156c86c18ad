//! 가격 이력 조회 기간 정의.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 종가 이력을 조회할 기간 (Yahoo Finance range 문자열).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LookbackPeriod {
    /// 5일
    D5,
    /// 1개월
    #[default]
    M1,
    /// 3개월
    M3,
    /// 6개월
    M6,
    /// 1년
    Y1,
}

impl LookbackPeriod {
    /// Yahoo Finance range 문자열로 변환합니다.
    pub fn to_yahoo_range(&self) -> &'static str {
        match self {
            LookbackPeriod::D5 => "5d",
            LookbackPeriod::M1 => "1mo",
            LookbackPeriod::M3 => "3mo",
            LookbackPeriod::M6 => "6mo",
            LookbackPeriod::Y1 => "1y",
        }
    }

    /// Yahoo Finance range 문자열에서 파싱합니다.
    pub fn from_yahoo_range(s: &str) -> Option<Self> {
        match s {
            "5d" => Some(LookbackPeriod::D5),
            "1mo" => Some(LookbackPeriod::M1),
            "3mo" => Some(LookbackPeriod::M3),
            "6mo" => Some(LookbackPeriod::M6),
            "1y" => Some(LookbackPeriod::Y1),
            _ => None,
        }
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_yahoo_range())
    }
}

impl FromStr for LookbackPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_yahoo_range(&s.trim().to_lowercase())
            .ok_or_else(|| format!("Invalid lookback period: {}", s))
    }
}

impl TryFrom<String> for LookbackPeriod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LookbackPeriod> for String {
    fn from(period: LookbackPeriod) -> Self {
        period.to_yahoo_range().to_string()
    }
}
