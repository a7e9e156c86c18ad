//! # Ticker Core
//!
//! 종목 자동완성 검색의 핵심 도메인 모델을 제공합니다:
//! - 종목 카탈로그와 부분 문자열 검색
//! - 검색/확정 2단계 선택 상태 머신
//! - 선택 세션과 가격 이력 제공자 trait
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
