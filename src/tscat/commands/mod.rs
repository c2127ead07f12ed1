use crate::compose::ExportFormat;
use crate::config::CatalogConfig;
use crate::model::Scope;
use std::path::PathBuf;

pub mod backup;
pub mod config;
pub mod entries;
pub mod export;
pub mod helpers;
pub mod scopes;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Holds the catalog slot and `config.json`.
    pub data_dir: PathBuf,
    /// Default destination of downloads and backups.
    pub work_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the scope listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeSummary {
    /// 1-based position in the catalog.
    pub position: usize,
    pub scope_name: String,
    pub full_scope_string: String,
    pub entry_count: usize,
}

#[derive(Debug, Clone)]
pub struct ComposedText {
    pub format: ExportFormat,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_scopes: Vec<ScopeSummary>,
    pub viewed_scope: Option<Scope>,
    pub composed: Option<ComposedText>,
    pub written_paths: Vec<PathBuf>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_scopes(mut self, scopes: Vec<ScopeSummary>) -> Self {
        self.listed_scopes = scopes;
        self
    }

    pub fn with_viewed_scope(mut self, scope: Scope) -> Self {
        self.viewed_scope = Some(scope);
        self
    }

    pub fn with_composed(mut self, format: ExportFormat, text: String) -> Self {
        self.composed = Some(ComposedText { format, text });
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_paths.push(path);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
