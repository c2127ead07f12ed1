use crate::error::Result;

/// Raw durable key-value slots holding text.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::slot::PersistentSlot`] handles typed (de)serialization and
/// corruption recovery.
pub trait SlotBackend {
    /// Read the raw text stored under `key`.
    /// Returns Ok(None) if the slot does not exist.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the contents of the slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, text: &str) -> Result<()>;

    /// Delete the slot. Removing a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Lets a caller keep its own handle on a backend while a store borrows it.
impl<B: SlotBackend + ?Sized> SlotBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, text: &str) -> Result<()> {
        (**self).write(key, text)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
