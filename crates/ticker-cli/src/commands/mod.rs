//! CLI 명령어 구현 모듈.

pub mod history;
pub mod init_catalog;
pub mod render;
pub mod search;
pub mod session;
