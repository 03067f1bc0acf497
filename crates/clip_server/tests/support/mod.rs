//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use clip_server::{create_app, AppState, Config, MemoryStore};
use std::sync::Arc;

pub(crate) fn test_config(max_paste_size: u64, max_total_size: u64) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        max_paste_size,
        max_total_size,
    }
}

pub(crate) fn test_server_for_config(config: Config) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_limits(config.limits()));
    let state = AppState::with_store(config, store.clone());
    let server = TestServer::new(create_app(state)).expect("server");
    (server, store)
}

pub(crate) fn setup_test_server() -> (TestServer, Arc<MemoryStore>) {
    test_server_for_config(test_config(0, 0))
}

