use crate::commands::helpers::record_mutation;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Catalog;
use crate::store::{CatalogStore, SlotBackend};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

pub fn backup_filename(now: DateTime<Utc>) -> String {
    format!("tscat-backup-{}.json", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Writes the whole catalog as JSON.
///
/// `dest` may be a file path or an existing directory; a directory (or no `dest`)
/// gets a timestamped file name.
pub fn backup<B: SlotBackend>(
    store: &CatalogStore<B>,
    dest: Option<&Path>,
    work_dir: &Path,
) -> Result<CmdResult> {
    let snapshot = store.snapshot();
    let mut result = CmdResult::default();

    if snapshot.is_empty() {
        result.add_message(CmdMessage::info("No scopes to back up."));
        return Ok(result);
    }

    let path = match dest {
        Some(dest) if dest.is_dir() => dest.join(backup_filename(Utc::now())),
        Some(dest) => dest.to_path_buf(),
        None => work_dir.join(backup_filename(Utc::now())),
    };

    let content = serde_json::to_string_pretty(&*snapshot).map_err(CatalogError::Serialization)?;
    fs::write(&path, content).map_err(CatalogError::Io)?;

    result.add_message(CmdMessage::success(format!(
        "Backed up {} scopes to {}",
        snapshot.len(),
        path.display()
    )));
    Ok(result.with_written_path(path))
}

/// Replaces the catalog with the contents of a backup file.
pub fn restore<B: SlotBackend>(store: &mut CatalogStore<B>, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let content = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog: Catalog = match serde_json::from_str(&content) {
        Ok(catalog) => catalog,
        Err(e) => {
            result.add_message(CmdMessage::error(format!(
                "{} is not a valid catalog: {}",
                path.display(),
                e
            )));
            return Ok(result);
        }
    };

    let count = catalog.len();
    if record_mutation(&mut result, store.replace_all(catalog))?.is_some() {
        result.add_message(CmdMessage::success(format!(
            "Restored {} scopes from {}",
            count,
            path.display()
        )));
    }
    Ok(result)
}
