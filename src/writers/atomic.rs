use crate::error::{ProcessingError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path` through a temporary file in the same directory,
/// renamed into place once fully written. An existing file is replaced.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file =
        NamedTempFile::new_in(dir).map_err(|e| ProcessingError::file_access(dir, e))?;
    temp_file
        .write_all(contents.as_bytes())
        .and_then(|_| temp_file.as_file().sync_all())
        .map_err(|e| ProcessingError::file_access(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| ProcessingError::file_access(path, e.error))?;

    Ok(())
}
