//! Store behavior tests.

use super::*;
use std::sync::{Arc, Barrier};
use std::thread;

fn limited_store(max_paste_size: u64, max_total_size: u64) -> MemoryStore {
    MemoryStore::with_limits(StoreLimits {
        max_paste_size,
        max_total_size,
    })
}

fn assert_missing(store: &MemoryStore, key: &str) {
    match store.get(key) {
        Err(AppError::NotFound) => {}
        other => panic!("expected NotFound for {:?}, got {:?}", key, other),
    }
}

mod concurrency;
