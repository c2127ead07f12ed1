use crate::api::{CatalogApi, CatalogPaths};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "TSCAT_HOME";

pub struct CatalogContext {
    pub api: CatalogApi<FsBackend>,
    pub config: CatalogConfig,
}

/// `$TSCAT_HOME` when set and non-empty, else the platform data directory.
pub fn resolve_data_dir(home_override: Option<OsString>) -> Result<PathBuf> {
    if let Some(home) = home_override.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "tscat", "tscat").ok_or_else(|| {
        CatalogError::Config("Could not determine data directory".to_string())
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub fn initialize(cwd: &Path) -> Result<CatalogContext> {
    let data_dir = resolve_data_dir(std::env::var_os(HOME_ENV))?;
    initialize_in(data_dir, cwd)
}

pub fn initialize_in(data_dir: PathBuf, cwd: &Path) -> Result<CatalogContext> {
    let config = CatalogConfig::load(&data_dir).map_err(|e| {
        CatalogError::Config(format!(
            "{}: {}",
            data_dir.join("config.json").display(),
            e
        ))
    })?;
    debug!(data_dir = %data_dir.display(), slot_key = %config.slot_key, "initializing catalog");

    let backend = FsBackend::new(data_dir.clone());
    let paths = CatalogPaths {
        data_dir,
        work_dir: cwd.to_path_buf(),
    };
    let api = CatalogApi::new(backend, paths, config.clone());

    Ok(CatalogContext { api, config })
}
