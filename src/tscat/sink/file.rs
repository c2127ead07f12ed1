use crate::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `text` as a plain-text file named `filename` inside `dir`.
///
/// `dir` must already exist. Returns the path that was written.
pub fn download_to_file(text: &str, filename: &str, dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(CatalogError::Environment(format!(
            "download directory does not exist: {}",
            dir.display()
        )));
    }

    let is_plain_name = Path::new(filename)
        .file_name()
        .is_some_and(|name| name == filename);
    if !is_plain_name {
        return Err(CatalogError::Api(format!("Invalid file name: {}", filename)));
    }

    let path = dir.join(filename);
    fs::write(&path, text).map_err(CatalogError::Io)?;
    debug!(path = %path.display(), bytes = text.len(), "file written");
    Ok(path)
}
