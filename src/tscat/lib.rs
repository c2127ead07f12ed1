//! # tscat Architecture
//!
//! tscat keeps a catalog of translation strings grouped into named scopes and composes
//! each scope into two export formats: an `en.json` resource file and a react-intl
//! `messages.js` module. The catalog is a library; the `tscat` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Installs the tracing subscriber                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves config-driven defaults (compose style, dirs)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResult messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore: mutations, uniqueness, write-through       │
//! │  - PersistentSlot over a SlotBackend (fs or memory)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Composition (`compose`) and the output sinks (`sink`) sit beside the layers: the
//! composer is pure, the sinks only move finished text to the clipboard or a file.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to
//! stdout/stderr. Validation failures are error-level messages on the result, not `Err`s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: Slot persistence and the catalog store
//! - [`model`]: `Catalog`, `Scope`, `LanguageBucket`, `TranslationString`
//! - [`compose`]: `en.json` and `messages.js` generation
//! - [`sink`]: Clipboard and file destinations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod sink;
pub mod store;
