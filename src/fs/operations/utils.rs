//! Shared helpers for client operations.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::api::API_PREFIX;
use crate::error::Result;

/// Strip a single leading slash. Nothing else is canonicalized: `..` and
/// percent-escapes pass through untouched.
pub(crate) fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

pub(crate) fn folder_endpoint(path: &str) -> String {
    format!("{}/folders/{}", API_PREFIX, normalize_path(path))
}

pub(crate) fn file_endpoint(path: &str) -> String {
    format!("{}/files/{}", API_PREFIX, normalize_path(path))
}

/// Name prefix and suffix for a local copy of `remote_path`: `"{stem}-"` and
/// `".{ext}"` (empty without an extension).
pub(crate) fn temp_name_parts(remote_path: &str) -> (String, String) {
    let remote = Path::new(normalize_path(remote_path));
    let stem = remote
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("download");
    let suffix = remote
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    (format!("{}-", stem), suffix)
}

/// Write `data` to a newly created file in `dir` named after `remote_path`
/// and return its path. The file is created exclusively and removed again if
/// the write fails.
pub(crate) async fn write_new_temp(dir: &Path, remote_path: &str, data: &[u8]) -> Result<PathBuf> {
    let (prefix, suffix) = temp_name_parts(remote_path);
    let temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(&suffix)
        .rand_bytes(8)
        .tempfile_in(dir)?;
    write_all(&temp, data).await?;

    let (_, path) = temp.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Replace `target` with `data`.
///
/// The bytes land in a temp file beside `target` which is then renamed over
/// it, so a symlink at `target` is replaced rather than followed and a failed
/// write leaves `target` untouched.
pub(crate) async fn write_replacing(target: &Path, data: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = tempfile::Builder::new().prefix(".brickftp-").tempfile_in(dir)?;
    write_all(&temp, data).await?;

    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

async fn write_all(temp: &NamedTempFile, data: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::from_std(temp.as_file().try_clone()?);
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}
