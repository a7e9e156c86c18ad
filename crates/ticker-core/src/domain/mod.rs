//! 종목 검색과 선택을 위한 도메인 모델.

mod catalog;
mod price_provider;
mod selection;
mod session;

pub use catalog::*;
pub use price_provider::*;
pub use selection::*;
pub use session::*;
