//! Typed durable slots.
//!
//! A [`PersistentSlot`] binds a key in a [`SlotBackend`] to a value type through a
//! [`Codec`]. Loading never fails: a missing slot yields the caller's default and a
//! slot whose payload cannot be decoded is deleted before falling back to the default.

use super::backend::SlotBackend;
use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Converts values to and from the text kept in a slot.
pub trait Codec<T> {
    fn serialize(&self, value: &T) -> Result<String>;
    fn deserialize(&self, text: &str) -> Result<T>;
}

/// Pretty-printed JSON, the default slot encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl<T: Serialize + DeserializeOwned> Codec<T> for JsonCodec {
    fn serialize(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn deserialize(&self, text: &str) -> Result<T> {
        Ok(serde_json::from_str(text)?)
    }
}

pub struct PersistentSlot<T, B, C = JsonCodec> {
    backend: B,
    key: String,
    codec: C,
    _value: PhantomData<fn() -> T>,
}

impl<T, B> PersistentSlot<T, B, JsonCodec>
where
    B: SlotBackend,
    JsonCodec: Codec<T>,
{
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self::with_codec(backend, key, JsonCodec)
    }
}

impl<T, B, C> PersistentSlot<T, B, C>
where
    B: SlotBackend,
    C: Codec<T>,
{
    pub fn with_codec(backend: B, key: impl Into<String>, codec: C) -> Self {
        Self {
            backend,
            key: key.into(),
            codec,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load_or(&self, default: T) -> T {
        self.load_or_else(|| default)
    }

    /// Like [`load_or`](Self::load_or) but only builds the default when it is needed.
    pub fn load_or_else(&self, default: impl FnOnce() -> T) -> T {
        match self.backend.read(&self.key) {
            Ok(Some(text)) if !text.is_empty() => match self.codec.deserialize(&text) {
                Ok(value) => return value,
                Err(e) => self.discard(&e),
            },
            Ok(_) => debug!(key = %self.key, "slot empty, using default"),
            Err(e @ CatalogError::CorruptSlot { .. }) => self.discard(&e),
            Err(e) => warn!(key = %self.key, error = %e, "slot unreadable, using default"),
        }
        default()
    }

    fn discard(&self, cause: &CatalogError) {
        warn!(key = %self.key, error = %cause, "discarding corrupt slot");
        if let Err(e) = self.backend.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to remove corrupt slot");
        }
    }

    pub fn save(&self, value: &T) -> Result<()> {
        let text = self.codec.serialize(value)?;
        self.backend.write(&self.key, &text)?;
        debug!(key = %self.key, bytes = text.len(), "slot written");
        Ok(())
    }

    /// Moves the slot to `key`, writing `value` there and deleting the old slot.
    ///
    /// The new slot is written first. On any failure the slot stays bound to the old
    /// key and the copy under the new key is removed, so exactly one slot holds the value.
    pub fn rebind(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let key = key.into();
        if key == self.key {
            return self.save(value);
        }

        let previous = std::mem::replace(&mut self.key, key);
        let moved = self.save(value).and_then(|()| self.backend.remove(&previous));
        if let Err(e) = moved {
            let abandoned = std::mem::replace(&mut self.key, previous);
            if let Err(cleanup) = self.backend.remove(&abandoned) {
                warn!(key = %abandoned, error = %cleanup, "failed to remove abandoned slot");
            }
            return Err(e);
        }
        debug!(from = %previous, to = %self.key, "slot rebound");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn absent_slot_returns_default() {
        let backend = MemBackend::new();
        let slot: PersistentSlot<Vec<String>, _> = PersistentSlot::new(&backend, "k");
        assert_eq!(slot.load_or(vec!["d".to_string()]), vec!["d".to_string()]);
        assert!(!backend.contains("k"));
    }

    #[test]
    fn lazy_default_is_not_built_when_slot_exists() {
        let backend = MemBackend::new();
        let slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "k");
        slot.save(&vec![1, 2]).unwrap();

        let loaded = slot.load_or_else(|| panic!("default should not be built"));
        assert_eq!(loaded, vec![1, 2]);
    }

    #[test]
    fn corrupt_slot_is_removed_and_default_returned() {
        let backend = MemBackend::new();
        backend.put_raw("k", r#"[{"scopeName": "tru"#);
        let slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "k");

        assert_eq!(slot.load_or_else(Vec::new), Vec::<u32>::new());
        assert!(!backend.contains("k"));
    }

    #[test]
    fn empty_payload_counts_as_absent() {
        let backend = MemBackend::new();
        backend.put_raw("k", "");
        let slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "k");
        assert_eq!(slot.load_or(vec![7]), vec![7]);
    }

    #[test]
    fn rebind_moves_value_and_removes_previous_slot() {
        let backend = MemBackend::new();
        let mut slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "old");
        slot.save(&vec![1]).unwrap();

        slot.rebind("new", &vec![1, 2]).unwrap();

        assert_eq!(slot.key(), "new");
        assert_eq!(backend.keys(), vec!["new".to_string()]);
        assert_eq!(slot.load_or(vec![]), vec![1, 2]);
    }

    #[test]
    fn failed_rebind_keeps_previous_slot() {
        let backend = MemBackend::new();
        let mut slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "old");
        slot.save(&vec![1]).unwrap();
        backend.set_simulate_write_error(true);

        assert!(slot.rebind("new", &vec![1]).is_err());
        assert_eq!(slot.key(), "old");
        assert!(backend.contains("old"));
    }

    #[test]
    fn rebind_rolls_back_when_old_slot_cannot_be_removed() {
        let backend = MemBackend::new();
        let mut slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "old");
        slot.save(&vec![1]).unwrap();
        backend.fail_removes_of("old");

        assert!(slot.rebind("new", &vec![1]).is_err());
        assert_eq!(slot.key(), "old");
        assert_eq!(backend.keys(), vec!["old".to_string()]);
        assert_eq!(slot.load_or(vec![]), vec![1]);
    }

    #[test]
    fn undecodable_backend_payload_is_discarded() {
        let temp = tempfile::TempDir::new().unwrap();
        let backend = crate::store::fs_backend::FsBackend::new(temp.path().to_path_buf());
        std::fs::write(backend.slot_path("k"), [b'[', 0xE2, 0x82]).unwrap();
        let slot: PersistentSlot<Vec<u32>, _> = PersistentSlot::new(&backend, "k");

        assert_eq!(slot.load_or(vec![9]), vec![9]);
        assert!(!backend.slot_path("k").exists());
    }

    struct LinesCodec;

    impl Codec<Vec<String>> for LinesCodec {
        fn serialize(&self, value: &Vec<String>) -> Result<String> {
            Ok(value.join("\n"))
        }

        fn deserialize(&self, text: &str) -> Result<Vec<String>> {
            if text.contains('\0') {
                return Err(CatalogError::Store("nul byte".into()));
            }
            Ok(text.lines().map(str::to_string).collect())
        }
    }

    #[test]
    fn custom_codec_is_used_for_both_directions() {
        let backend = MemBackend::new();
        let slot = PersistentSlot::with_codec(&backend, "lines", LinesCodec);
        slot.save(&vec!["a".to_string(), "b".to_string()]).unwrap();

        assert_eq!(backend.read("lines").unwrap().as_deref(), Some("a\nb"));
        assert_eq!(slot.load_or(vec![]), vec!["a".to_string(), "b".to_string()]);

        backend.put_raw("lines", "bad\0");
        assert_eq!(slot.load_or(vec![]), Vec::<String>::new());
        assert!(!backend.contains("lines"));
    }
}
