//! CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 대화형 종목 검색/선택 세션
//! - 단발성 검색 및 종가 조회 명령
//! - 시작용 카탈로그 파일 생성

pub mod commands;

pub use commands::*;
