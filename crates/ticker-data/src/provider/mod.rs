//! 가격 이력 제공자 구현.

mod yahoo;

pub use yahoo::YahooPriceProvider;
