//! Core domain library for clip (store, config, size parsing).

/// Runtime configuration and defaults.
pub mod config;
/// Shared constants used across clip crates.
pub mod constants;
/// Process-global environment mutation helpers.
pub mod env;
/// Application error types (storage/domain).
pub mod error;
/// Human-readable byte size parsing.
pub mod size;
/// Bounded in-memory paste storage.
pub mod store;

pub use config::Config;
pub use constants::{DEFAULT_CLI_SERVER_URL, DEFAULT_HOST, DEFAULT_PORT};
pub use error::AppError;
pub use size::{format_size, parse_size, SizeParseError};
pub use store::{MemoryStore, PasteStore, StoreLimits, StoreStats};
