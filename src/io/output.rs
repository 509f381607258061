//! Output document writing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Writes `document` as pretty-printed JSON.
///
/// The document is written to a temporary sibling file first and renamed
/// into place, so a failed write never leaves a partial document at `path`.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, document: &T) -> EngineResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(document).map_err(|e| write_error(path, e))?;
    write_atomically(path, json.as_bytes())?;

    info!(path = %path.display(), bytes = json.len(), "Wrote output document");
    Ok(())
}

/// Writes bytes to a temporary sibling of `path`, then renames it into place.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> EngineResult<()> {
    let staging = staging_path(path);

    if let Err(e) = fs::write(&staging, contents) {
        let _ = fs::remove_file(&staging);
        return Err(write_error(path, e));
    }

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        write_error(path, e)
    })
}

/// Returns the temporary path used while writing `path`.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

fn write_error(path: &Path, error: impl std::fmt::Display) -> EngineError {
    EngineError::OutputWriteError {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
