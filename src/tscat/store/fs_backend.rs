use super::backend::SlotBackend;
use crate::error::{CatalogError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Slots stored as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CatalogError::Io)?;
        }
        Ok(())
    }
}

/// Slot keys whose file would collide with other files in the data directory.
pub const RESERVED_KEYS: &[&str] = &["config"];

/// A key must be a plain file stem that does not shadow `config.json`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if !valid {
        return Err(CatalogError::Store(format!("Invalid slot key: {:?}", key)));
    }
    if RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key)) {
        return Err(CatalogError::Store(format!("Reserved slot key: {:?}", key)));
    }
    Ok(())
}

impl SlotBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let bytes = match fs::read(self.slot_path(key)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CatalogError::Io(e)),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| CatalogError::CorruptSlot {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn write(&self, key: &str, text: &str) -> Result<()> {
        validate_key(key)?;
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, text).map_err(CatalogError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.slot_path(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CatalogError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CatalogError::Io(e)),
        }
    }
}
