//! # Storage Layer
//!
//! Storage is split in three levels:
//!
//! - [`backend::SlotBackend`]: raw named text slots. [`fs_backend::FsBackend`] keeps each
//!   slot in its own file, [`mem_backend::MemBackend`] keeps them in memory for tests.
//! - [`slot::PersistentSlot`]: a typed value bound to one slot through a codec
//!   (JSON by default). Knows nothing about catalogs.
//! - [`catalog::CatalogStore`]: the catalog itself, its mutations and invariants,
//!   written through to a `PersistentSlot` after every change.
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── TranslationStrings.json   # The catalog (JSON array of scopes)
//! └── config.json               # Configuration
//! ```

pub mod backend;
pub mod catalog;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot;

pub use backend::SlotBackend;
pub use catalog::{CatalogStore, Mutation, DEFAULT_SLOT_KEY};
