//! Paste storage contract and the bounded in-memory backend.

mod memory;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;

use crate::error::AppError;

/// Storage backend for pastes addressed by string key.
///
/// The empty string is a valid key and addresses the default paste.
pub trait PasteStore: Send + Sync {
    /// Fetch an owned copy of the bytes stored under `key`.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when no paste exists for `key`.
    fn get(&self, key: &str) -> Result<Vec<u8>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`AppError::TooLarge`] when `value` exceeds the per-paste ceiling;
    /// the store is left unchanged in that case.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError>;
}

/// Byte ceilings applied by [`MemoryStore`]. Zero disables a ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreLimits {
    /// Hard ceiling on a single paste.
    pub max_paste_size: u64,
    /// Soft ceiling on all stored bytes, enforced by evicting oldest writes.
    pub max_total_size: u64,
}

/// Point-in-time view of store occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub entries: usize,
    pub total_bytes: u64,
}
