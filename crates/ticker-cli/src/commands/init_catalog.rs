//! 시작용 카탈로그 파일 생성.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// 내장 샘플 목록을 카탈로그 파일로 저장하고 항목 수를 반환합니다.
///
/// 이미 파일이 있으면 `force`가 아닌 한 덮어쓰지 않습니다.
pub fn init_catalog(path: &Path, force: bool) -> Result<usize> {
    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let entries = ticker_data::builtin_sample();
    ticker_data::write_catalog(path, &entries)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), count = entries.len(), "catalog written");
    Ok(entries.len())
}
