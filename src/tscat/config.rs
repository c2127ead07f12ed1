use crate::compose::ComposeStyle;
use crate::error::{CatalogError, Result};
use crate::store::fs_backend::{validate_key, RESERVED_KEYS};
use crate::store::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tscat, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Name of the slot holding the catalog
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Escape quotes and backslashes in exported text
    #[serde(default = "default_escape_output")]
    pub escape_output: bool,

    /// Where `download` writes files (current directory when unset)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_escape_output() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            escape_output: default_escape_output(),
            export_dir: None,
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &["slot-key", "escape-output", "export-dir"];

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn compose_style(&self) -> ComposeStyle {
        if self.escape_output {
            ComposeStyle::Escaped
        } else {
            ComposeStyle::Raw
        }
    }

    pub fn export_dir_or(&self, fallback: &Path) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot-key" => Some(self.slot_key.clone()),
            "escape-output" => Some(self.escape_output.to_string()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "slot-key" => {
                let value = value.trim();
                if RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(value)) {
                    return Err(format!("Slot key {} is reserved", value));
                }
                if validate_key(value).is_err() {
                    return Err(format!("Invalid slot key: {}", value));
                }
                self.slot_key = value.to_string();
            }
            "escape-output" => {
                self.escape_output = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("Expected true or false, got {}", other)),
                };
            }
            "export-dir" => {
                let value = value.trim();
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.slot_key, "TranslationStrings");
        assert!(config.escape_output);
        assert_eq!(config.compose_style(), ComposeStyle::Escaped);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = CatalogConfig::load(temp.path()).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let mut config = CatalogConfig::default();
        config.set("escape-output", "false").unwrap();
        config.set("export-dir", "/tmp/out").unwrap();
        config.save(&dir).unwrap();

        let loaded = CatalogConfig::load(&dir).unwrap();
        assert!(!loaded.escape_output);
        assert_eq!(loaded.export_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(loaded.compose_style(), ComposeStyle::Raw);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"escape_output": false}"#).unwrap();

        let config = CatalogConfig::load(temp.path()).unwrap();
        assert_eq!(config.slot_key, "TranslationStrings");
        assert!(!config.escape_output);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CatalogConfig::default();
        assert!(config.set("slot-key", "../x").is_err());
        assert_eq!(
            config.set("slot-key", "config"),
            Err("Slot key config is reserved".to_string())
        );
        assert!(config.set("slot-key", "CONFIG").is_err());
        assert!(config.set("escape-output", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_clearing_export_dir() {
        let mut config = CatalogConfig::default();
        config.set("export-dir", "out").unwrap();
        config.set("export-dir", "").unwrap();
        assert_eq!(config.export_dir, None);
        assert_eq!(config.get("export-dir").as_deref(), Some(""));
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let keys: Vec<_> = CatalogConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
