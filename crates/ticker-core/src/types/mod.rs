//! 종목 검색과 가격 조회에 쓰이는 공통 타입.

mod lookback;
mod market;
mod price;

pub use lookback::*;
pub use market::*;
pub use price::*;
