//! Writing decoded image bytes to disk.

use std::fs;
use std::path::Path;

use crate::error::ImageError;

/// Write image bytes to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<(), ImageError> {
    if let Some(parent) = parent_to_create(path) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Parent directory to create, if any. A bare filename has an empty parent
/// that must not be passed to `create_dir_all`.
fn parent_to_create(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
