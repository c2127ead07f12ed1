use crate::commands::{CmdMessage, CmdResult};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::store::{CatalogStore, SlotBackend};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes configuration stored in `config_dir`.
///
/// Changing `slot-key` moves the catalog to the new slot before the config is saved.
pub fn run<B: SlotBackend>(
    store: &mut CatalogStore<B>,
    config_dir: &Path,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = CatalogConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CatalogConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CatalogConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            if config.slot_key != store.slot_key() {
                store.rebind(config.slot_key.clone())?;
            }
            config.save(config_dir)?;

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::scopes;
    use crate::store::fs_backend::FsBackend;
    use crate::store::mem_backend::MemBackend;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let mut store = CatalogStore::open(FsBackend::new(temp.path().to_path_buf()));
        let result = run(&mut store, temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(CatalogConfig::default()));
    }

    #[test]
    fn unknown_key_is_error() {
        let temp = TempDir::new().unwrap();
        let mut store = CatalogStore::open(FsBackend::new(temp.path().to_path_buf()));
        let result = run(
            &mut store,
            temp.path(),
            ConfigAction::ShowKey("nope".into()),
        )
        .unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn changing_slot_key_moves_catalog_file() {
        let temp = TempDir::new().unwrap();
        let mut store = CatalogStore::open(FsBackend::new(temp.path().to_path_buf()));
        scopes::add(&mut store, "auth").unwrap();
        assert!(temp.path().join("TranslationStrings.json").exists());

        let result = run(
            &mut store,
            temp.path(),
            ConfigAction::Set("slot-key".into(), "Catalog".into()),
        )
        .unwrap();

        assert!(!result.has_errors());
        assert!(!temp.path().join("TranslationStrings.json").exists());
        assert!(temp.path().join("Catalog.json").exists());
        assert_eq!(
            CatalogConfig::load(temp.path()).unwrap().slot_key,
            "Catalog"
        );

        let reopened =
            CatalogStore::open_with_key(FsBackend::new(temp.path().to_path_buf()), "Catalog");
        assert!(reopened.scope("auth").is_some());
    }

    #[test]
    fn config_slot_key_is_refused_and_catalog_kept() {
        let temp = TempDir::new().unwrap();
        let mut store = CatalogStore::open(FsBackend::new(temp.path().to_path_buf()));
        scopes::add(&mut store, "auth").unwrap();

        let result = run(
            &mut store,
            temp.path(),
            ConfigAction::Set("slot-key".into(), "config".into()),
        )
        .unwrap();

        assert!(result.has_errors());
        assert_eq!(store.slot_key(), "TranslationStrings");
        assert!(temp.path().join("TranslationStrings.json").exists());

        let saved = CatalogConfig::load(temp.path()).unwrap();
        let reopened =
            CatalogStore::open_with_key(FsBackend::new(temp.path().to_path_buf()), saved.slot_key);
        assert!(reopened.scope("auth").is_some());
    }

    #[test]
    fn failed_slot_move_leaves_config_untouched() {
        let temp = TempDir::new().unwrap();
        let backend = MemBackend::new();
        let mut store = CatalogStore::open(&backend);
        scopes::add(&mut store, "auth").unwrap();
        backend.fail_removes_of("TranslationStrings");

        let outcome = run(
            &mut store,
            temp.path(),
            ConfigAction::Set("slot-key".into(), "Catalog".into()),
        );

        assert!(outcome.is_err());
        assert_eq!(store.slot_key(), "TranslationStrings");
        assert_eq!(backend.keys(), vec!["TranslationStrings".to_string()]);
        assert_eq!(CatalogConfig::load(temp.path()).unwrap(), CatalogConfig::default());
    }
}
