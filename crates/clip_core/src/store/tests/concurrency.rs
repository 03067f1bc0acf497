//! Concurrent access keeps bookkeeping consistent.

use super::*;

#[test]
fn test_concurrent_writes_to_disjoint_keys_all_land() {
    let store = Arc::new(MemoryStore::new());
    let workers = 8;
    let per_worker = 50;
    let barrier = Arc::new(Barrier::new(workers));

    let handles: Vec<_> = (0..workers)
        .map(|worker| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_worker {
                    let key = format!("w{}-{}", worker, i);
                    store.set(&key, key.as_bytes()).expect("set");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker join");
    }

    for worker in 0..workers {
        for i in 0..per_worker {
            let key = format!("w{}-{}", worker, i);
            assert_eq!(store.get(&key).unwrap(), key.as_bytes());
        }
    }
    assert_eq!(store.stats().unwrap().entries, workers * per_worker);
    store.assert_consistent();
}

#[test]
fn test_readers_never_observe_torn_bookkeeping() {
    let store = Arc::new(limited_store(0, 256));
    let barrier = Arc::new(Barrier::new(4));

    let writers: Vec<_> = (0..2)
        .map(|writer| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..500usize {
                    let key = if i % 3 == 0 {
                        "shared".to_string()
                    } else {
                        format!("w{}-{}", writer, i % 20)
                    };
                    let len = (i * 13 + writer) % 40 + 1;
                    store.set(&key, &vec![b'a'; len]).expect("set");
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let store = store.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    store.assert_consistent();
                    if let Ok(value) = store.get("shared") {
                        assert!(value.iter().all(|b| *b == b'a'));
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("thread join");
    }
    store.assert_consistent();
    assert!(store.stats().unwrap().total_bytes <= 256);
}

#[test]
fn test_store_is_usable_through_trait_object() {
    let store: Arc<dyn PasteStore> = Arc::new(MemoryStore::new());
    let writer = {
        let store = store.clone();
        thread::spawn(move || store.set("", b"from thread"))
    };
    writer.join().expect("join").expect("set");
    assert_eq!(store.get("").unwrap(), b"from thread");
}
