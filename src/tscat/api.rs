//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every catalog operation, regardless of the UI being used.
//!
//! It dispatches to `commands/*.rs`, resolves defaults that depend on configuration
//! (compose style, export directory) and returns `Result<CmdResult>`. It never prints.
//!
//! `CatalogApi<B: SlotBackend>` is generic over the slot backend:
//! - Production: `CatalogApi<FsBackend>`
//! - Testing: `CatalogApi<MemBackend>`

use crate::commands;
use crate::compose::{ComposeStyle, ExportFormat};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Scope};
use crate::store::{CatalogStore, SlotBackend};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct CatalogApi<B: SlotBackend> {
    store: CatalogStore<B>,
    paths: commands::CatalogPaths,
    config: CatalogConfig,
}

impl<B: SlotBackend> CatalogApi<B> {
    /// Opens the catalog stored under `config.slot_key` in `backend`.
    pub fn new(backend: B, paths: commands::CatalogPaths, config: CatalogConfig) -> Self {
        let store = CatalogStore::open_with_key(backend, config.slot_key.clone());
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn add_scope(&mut self, scope_name: &str) -> Result<commands::CmdResult> {
        commands::scopes::add(&mut self.store, scope_name)
    }

    pub fn delete_scope(&mut self, scope_name: &str) -> Result<commands::CmdResult> {
        commands::scopes::delete(&mut self.store, scope_name)
    }

    pub fn set_full_scope_string(
        &mut self,
        scope_name: &str,
        full_scope_string: &str,
    ) -> Result<commands::CmdResult> {
        commands::scopes::set_full_scope_string(&mut self.store, scope_name, full_scope_string)
    }

    pub fn list_scopes(&self) -> Result<commands::CmdResult> {
        commands::scopes::list(&self.store)
    }

    pub fn view_scope(&self, scope_name: &str) -> Result<commands::CmdResult> {
        commands::scopes::view(&self.store, scope_name)
    }

    pub fn add_entry(
        &mut self,
        scope_name: &str,
        local_id: &str,
        default_value: &str,
    ) -> Result<commands::CmdResult> {
        commands::entries::add(&mut self.store, scope_name, local_id, default_value)
    }

    pub fn delete_entry(&mut self, scope_name: &str, id: &str) -> Result<commands::CmdResult> {
        commands::entries::delete(&mut self.store, scope_name, id)
    }

    pub fn compose_resource_json(&self, scope_name: &str) -> Result<commands::CmdResult> {
        self.compose(scope_name, ExportFormat::ResourceJson)
    }

    pub fn compose_message_module(&self, scope_name: &str) -> Result<commands::CmdResult> {
        self.compose(scope_name, ExportFormat::MessageModule)
    }

    pub fn compose(&self, scope_name: &str, format: ExportFormat) -> Result<commands::CmdResult> {
        commands::export::compose(&self.store, scope_name, format, self.compose_style())
    }

    pub fn copy_export(
        &self,
        scope_name: &str,
        format: ExportFormat,
    ) -> Result<commands::CmdResult> {
        commands::export::copy(&self.store, scope_name, format, self.compose_style())
    }

    /// Writes the export into `dir`, or the configured export directory, or the
    /// working directory.
    pub fn download_export(
        &self,
        scope_name: &str,
        format: ExportFormat,
        dir: Option<&Path>,
    ) -> Result<commands::CmdResult> {
        let dir = match dir {
            Some(dir) => dir.to_path_buf(),
            None => self.config.export_dir_or(&self.paths.work_dir),
        };
        commands::export::download(&self.store, scope_name, format, self.compose_style(), &dir)
    }

    pub fn backup(&self, dest: Option<&Path>) -> Result<commands::CmdResult> {
        commands::backup::backup(&self.store, dest, &self.paths.work_dir)
    }

    pub fn restore(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::backup::restore(&mut self.store, path)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&mut self.store, &self.paths.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// A copy of one scope, for callers that need it outside a `CmdResult`.
    pub fn scope(&self, scope_name: &str) -> Result<Scope> {
        self.store
            .scope(scope_name.trim())
            .cloned()
            .ok_or_else(|| CatalogError::ScopeNotFound(scope_name.trim().to_string()))
    }

    /// Read-only view of the whole catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.store.snapshot()
    }

    pub fn compose_style(&self) -> ComposeStyle {
        self.config.compose_style()
    }

    pub fn paths(&self) -> &commands::CatalogPaths {
        &self.paths
    }

    pub fn data_file(&self) -> PathBuf {
        self.paths
            .data_dir
            .join(format!("{}.json", self.store.slot_key()))
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel, ScopeSummary};
