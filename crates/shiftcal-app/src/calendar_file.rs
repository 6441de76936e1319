//! Writing the rendered calendar to disk.

use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// ## Summary
/// Writes `contents` to `path`, replacing any previous calendar.
///
/// The data goes to a sibling temporary file first and is renamed into
/// place, so readers never see a half-written calendar.
///
/// ## Errors
/// Returns `AppError::IoError` if the directory cannot be created or the
/// file cannot be written or renamed.
///
/// ## Side Effects
/// Creates missing parent directories.
pub async fn write_calendar(path: &Path, contents: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let staging = staging_path(path);
    tokio::fs::write(&staging, contents).await?;
    tokio::fs::rename(&staging, path).await?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Calendar file written");

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
