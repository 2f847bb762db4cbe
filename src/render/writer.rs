// ABOUTME: Atomic output writer for the rendered page
// ABOUTME: Stages content in a temp file beside the destination and renames it into place

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::error::{RenderError, Result};

/// Write `contents` to `path` so that readers only ever see the old file or
/// the complete new one. The parent directory must already exist.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any early return removes it.
    let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
    debug!("Staging output in {}", staged.path().display());

    staged.write_all(contents).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    set_page_permissions(&staged, path).map_err(write_error)?;

    staged.persist(path).map_err(|e| write_error(e.error))?;

    info!(
        "Output written to file: {} ({} bytes)",
        path.display(),
        contents.len()
    );
    Ok(())
}

/// Temp files are created owner-only; published pages should be world-readable
/// like a freshly created file, or keep the mode of the file they replace.
#[cfg(unix)]
fn set_page_permissions(staged: &NamedTempFile, destination: &Path) -> std::io::Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(destination) {
        Ok(existing) if existing.is_file() => existing.permissions(),
        _ => Permissions::from_mode(0o644),
    };
    staged.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_page_permissions(_staged: &NamedTempFile, _destination: &Path) -> std::io::Result<()> {
    Ok(())
}
