use super::backend::SlotBackend;
use crate::error::{CatalogError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory slot backend for testing.
///
/// Uses `RefCell` for interior mutability since tscat is single-threaded.
/// This allows the `SlotBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    failing_removes: RefCell<HashSet<String>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Make every `remove` of `key` fail.
    pub fn fail_removes_of(&self, key: &str) {
        self.failing_removes.borrow_mut().insert(key.to_string());
    }

    /// Test helper to plant raw (possibly corrupt) text in a slot.
    pub fn put_raw(&self, key: &str, text: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl SlotBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.failing_removes.borrow().contains(key) {
            return Err(CatalogError::Store(format!("Simulated remove error: {}", key)));
        }
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
