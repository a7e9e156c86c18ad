//! 카탈로그 로딩과 가격 이력 제공자.
//!
//! 이 crate는 다음을 제공합니다:
//! - 종목 목록 JSON 파일 로딩 (실패 시 내장 샘플로 대체)
//! - Yahoo Finance 기반 `PriceHistoryProvider` 구현

pub mod catalog;
pub mod error;
pub mod provider;

pub use catalog::{builtin_sample, load, load_catalog, load_from_path, write_catalog};
pub use error::{DataError, Result};
pub use provider::YahooPriceProvider;
