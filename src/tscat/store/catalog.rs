//! # Catalog Store
//!
//! The authoritative in-memory catalog. All mutations go through [`CatalogStore`], which:
//!
//! - checks scope-name uniqueness and catalog-wide entry-id uniqueness itself and
//!   returns a [`Rejection`] instead of mutating when a check fails,
//! - builds a **new** [`Catalog`] for every change and swaps the shared snapshot, so a
//!   reader holding an older `Arc<Catalog>` never sees it change underneath,
//! - writes the new catalog through to its [`PersistentSlot`] once the change is applied.
//!
//! A failed write does not roll back the in-memory change. It is reported on the
//! returned [`Mutation`] so the caller can surface it as a warning.

use super::backend::SlotBackend;
use super::slot::PersistentSlot;
use crate::error::{Rejection, Result};
use crate::model::{Catalog, Scope, TranslationString};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the slot holding the catalog.
pub const DEFAULT_SLOT_KEY: &str = "TranslationStrings";

/// Outcome of an accepted mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// False when the target did not exist and nothing happened.
    pub changed: bool,
    /// Set when the in-memory change could not be written to durable storage.
    pub persist_warning: Option<String>,
}

impl Mutation {
    fn unchanged() -> Self {
        Self {
            changed: false,
            persist_warning: None,
        }
    }
}

pub struct CatalogStore<B: SlotBackend> {
    slot: PersistentSlot<Catalog, B>,
    current: Arc<Catalog>,
}

impl<B: SlotBackend> CatalogStore<B> {
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, DEFAULT_SLOT_KEY)
    }

    pub fn open_with_key(backend: B, key: impl Into<String>) -> Self {
        let slot = PersistentSlot::new(backend, key);
        let catalog = with_default_buckets(slot.load_or_else(Catalog::default));
        debug!(key = slot.key(), scopes = catalog.len(), "catalog loaded");
        Self {
            slot,
            current: Arc::new(catalog),
        }
    }

    /// The current catalog. Later mutations never modify a returned snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current)
    }

    pub fn scope(&self, scope_name: &str) -> Option<&Scope> {
        self.current.scope(scope_name)
    }

    pub fn slot_key(&self) -> &str {
        self.slot.key()
    }

    pub fn backend(&self) -> &B {
        self.slot.backend()
    }

    pub fn add_scope(&mut self, mut scope: Scope) -> Result<Mutation> {
        scope.scope_name = scope.scope_name.trim().to_string();
        if scope.scope_name.is_empty() {
            return Err(Rejection::EmptyField("Scope name").into());
        }
        if self.current.scope(&scope.scope_name).is_some() {
            return Err(Rejection::DuplicateScope(scope.scope_name).into());
        }
        scope.ensure_default_bucket();

        let mut seen = HashSet::new();
        for entry in scope.all_entries() {
            if !seen.insert(entry.id.as_str()) || self.current.contains_entry_id(&entry.id) {
                return Err(Rejection::DuplicateEntryId(entry.id.clone()).into());
            }
        }

        debug!(scope = %scope.scope_name, "adding scope");
        let mut next = (*self.current).clone();
        next.push(scope);
        Ok(self.commit(next))
    }

    /// Removes the scope and every entry it holds. Missing scopes are a no-op.
    pub fn delete_scope(&mut self, scope_name: &str) -> Result<Mutation> {
        if self.current.scope(scope_name).is_none() {
            return Ok(Mutation::unchanged());
        }

        debug!(scope = scope_name, "deleting scope");
        let mut next = (*self.current).clone();
        next.retain(|s| s.scope_name != scope_name);
        Ok(self.commit(next))
    }

    pub fn add_entry(&mut self, scope_name: &str, entry: TranslationString) -> Result<Mutation> {
        let entry = TranslationString::new(entry.id.trim(), entry.default_value);
        if entry.id.is_empty() {
            return Err(Rejection::EmptyField("Id").into());
        }
        if entry.default_value.is_empty() {
            return Err(Rejection::EmptyField("Default value").into());
        }
        if self.current.scope(scope_name).is_none() {
            return Err(Rejection::UnknownScope(scope_name.to_string()).into());
        }
        if self.current.contains_entry_id(&entry.id) {
            return Err(Rejection::DuplicateEntryId(entry.id).into());
        }

        debug!(scope = scope_name, id = %entry.id, "adding entry");
        let mut next = (*self.current).clone();
        if let Some(scope) = next.scope_mut(scope_name) {
            scope.default_bucket_mut().entries.push(entry);
        }
        Ok(self.commit(next))
    }

    /// Removes the entry with exactly this id from the scope's `en` bucket.
    pub fn delete_entry(&mut self, scope_name: &str, id: &str) -> Result<Mutation> {
        let exists = self
            .current
            .scope(scope_name)
            .is_some_and(|s| s.entries().any(|e| e.id == id));
        if !exists {
            return Ok(Mutation::unchanged());
        }

        debug!(scope = scope_name, id, "deleting entry");
        let mut next = (*self.current).clone();
        if let Some(scope) = next.scope_mut(scope_name) {
            scope.default_bucket_mut().entries.retain(|e| e.id != id);
        }
        Ok(self.commit(next))
    }

    pub fn set_full_scope_string(
        &mut self,
        scope_name: &str,
        full_scope_string: &str,
    ) -> Result<Mutation> {
        match self.current.scope(scope_name) {
            None => return Ok(Mutation::unchanged()),
            Some(scope) if scope.full_scope_string == full_scope_string => {
                return Ok(Mutation::unchanged())
            }
            Some(_) => {}
        }

        debug!(scope = scope_name, full_scope_string, "setting full scope string");
        let mut next = (*self.current).clone();
        if let Some(scope) = next.scope_mut(scope_name) {
            scope.full_scope_string = full_scope_string.to_string();
        }
        Ok(self.commit(next))
    }

    /// Replaces the whole catalog, e.g. when restoring a backup.
    ///
    /// The incoming catalog must satisfy the same uniqueness rules as incremental edits.
    pub fn replace_all(&mut self, catalog: Catalog) -> Result<Mutation> {
        let catalog = with_default_buckets(catalog);
        validate(&catalog)?;

        debug!(scopes = catalog.len(), "replacing catalog");
        Ok(self.commit(catalog))
    }

    /// Moves the catalog to another slot key, removing the old slot.
    pub fn rebind(&mut self, key: impl Into<String>) -> Result<()> {
        let current = Arc::clone(&self.current);
        self.slot.rebind(key, &current)
    }

    fn commit(&mut self, next: Catalog) -> Mutation {
        self.current = Arc::new(next);
        let persist_warning = match self.slot.save(&self.current) {
            Ok(()) => None,
            Err(e) => {
                warn!(key = self.slot.key(), error = %e, "failed to persist catalog");
                Some(format!("Changes could not be saved: {}", e))
            }
        };
        Mutation {
            changed: true,
            persist_warning,
        }
    }
}

fn with_default_buckets(catalog: Catalog) -> Catalog {
    let mut scopes = catalog.into_scopes();
    for scope in &mut scopes {
        scope.ensure_default_bucket();
    }
    Catalog::new(scopes)
}

fn validate(catalog: &Catalog) -> Result<()> {
    let mut names = HashSet::new();
    let mut ids = HashSet::new();
    for scope in catalog.scopes() {
        let name = scope.scope_name.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyField("Scope name").into());
        }
        if !names.insert(name) {
            return Err(Rejection::DuplicateScope(name.to_string()).into());
        }
        for entry in scope.all_entries() {
            if !ids.insert(entry.id.as_str()) {
                return Err(Rejection::DuplicateEntryId(entry.id.clone()).into());
            }
        }
    }
    Ok(())
}
