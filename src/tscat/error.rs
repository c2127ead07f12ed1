use thiserror::Error;

/// A user-correctable reason for refusing a catalog mutation.
///
/// Rejections never change state; the command layer turns them into
/// error-level messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A required field was empty after trimming.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Scope name should be unique")]
    DuplicateScope(String),

    #[error("Entered Id already exists. Id should be unique for each entry.")]
    DuplicateEntryId(String),

    #[error("Scope '{0}' does not exist")]
    UnknownScope(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error("Scope not found: {0}")]
    ScopeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// The slot exists but its bytes cannot be decoded.
    #[error("Corrupt slot {key}: {reason}")]
    CorruptSlot { key: String, reason: String },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
