//! In-memory paste store with per-paste and aggregate byte ceilings.

use super::{PasteStore, StoreLimits, StoreStats};
use crate::error::AppError;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

struct Slot {
    data: Vec<u8>,
    seq: u64,
}

#[derive(Default)]
struct StoreState {
    entries: HashMap<String, Slot>,
    // Write sequence -> key, oldest first. Each live key appears exactly once.
    order: BTreeMap<u64, String>,
    next_seq: u64,
    total_bytes: u64,
}

impl StoreState {
    fn stats(&self) -> StoreStats {
        StoreStats {
            entries: self.entries.len(),
            total_bytes: self.total_bytes,
        }
    }
}

/// Bounded paste store guarded by a single reader/writer lock.
///
/// Readers proceed in parallel. A write holds the lock exclusively across the
/// size check, eviction, insert and accounting, so the aggregate byte count
/// always matches the entry set for any observer.
#[derive(Default)]
pub struct MemoryStore {
    limits: StoreLimits,
    inner: RwLock<StoreState>,
}

impl MemoryStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store enforcing `limits`.
    ///
    /// # Arguments
    /// - `limits`: Per-paste and aggregate byte ceilings (`0` = unlimited).
    ///
    /// # Returns
    /// An empty [`MemoryStore`].
    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            limits,
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// Snapshot entry count and aggregate size.
    ///
    /// # Errors
    /// Returns an error if the lock is poisoned.
    pub fn stats(&self) -> Result<StoreStats, AppError> {
        Ok(self.read()?.stats())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::StorageMessage("paste store lock is poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::StorageMessage("paste store lock is poisoned".to_string()))
    }
}

impl PasteStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, AppError> {
        let state = self.read()?;
        state
            .entries
            .get(key)
            .map(|slot| slot.data.clone())
            .ok_or(AppError::NotFound)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError> {
        let size = value.len() as u64;
        let max_paste = self.limits.max_paste_size;
        if max_paste > 0 && size > max_paste {
            debug!(key, size, limit = max_paste, "rejecting oversized paste");
            return Err(AppError::TooLarge {
                size,
                limit: max_paste,
            });
        }

        let mut guard = self.write()?;
        let state = &mut *guard;

        // Detach the key from the recency index up front: it is re-appended at
        // the newest end below and must never be chosen for eviction.
        let old_size = match state.entries.get(key) {
            Some(slot) => {
                state.order.remove(&slot.seq);
                slot.data.len() as u64
            }
            None => 0,
        };
        let mut total = state.total_bytes - old_size + size;

        let max_total = self.limits.max_total_size;
        if max_total > 0 {
            while total > max_total {
                let Some((_, oldest)) = state.order.pop_first() else {
                    // Only the in-flight paste remains.
                    break;
                };
                if let Some(evicted) = state.entries.remove(&oldest) {
                    let freed = evicted.data.len() as u64;
                    total -= freed;
                    debug!(key = %oldest, freed, "evicted paste to honor total size limit");
                }
            }
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.order.insert(seq, key.to_string());
        state.entries.insert(
            key.to_string(),
            Slot {
                data: value.to_vec(),
                seq,
            },
        );
        state.total_bytes = total;
        Ok(())
    }
}

#[cfg(test)]
impl MemoryStore {
    /// Recompute the aggregate from the entry set under one read lock and
    /// compare it with the tracked counter and the recency index.
    pub(crate) fn assert_consistent(&self) {
        let state = self.read().expect("store lock");
        let summed: u64 = state
            .entries
            .values()
            .map(|slot| slot.data.len() as u64)
            .sum();
        assert_eq!(summed, state.total_bytes, "aggregate size drifted");
        assert_eq!(
            state.order.len(),
            state.entries.len(),
            "recency index out of sync"
        );
        for (seq, key) in &state.order {
            let slot = state.entries.get(key).expect("ordered key present");
            assert_eq!(slot.seq, *seq, "stale sequence for key {:?}", key);
        }
    }

    /// Keys from oldest to newest write.
    pub(crate) fn keys_oldest_first(&self) -> Vec<String> {
        let state = self.read().expect("store lock");
        state.order.values().cloned().collect()
    }
}
