//! Runtime configuration resolved once at startup.

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::store::StoreLimits;
use serde::Deserialize;

/// Runtime configuration for the clip server.
///
/// Size ceilings are byte counts where `0` means unlimited.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub max_paste_size: u64,
    #[serde(default)]
    pub max_total_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_paste_size: 0,
            max_total_size: 0,
        }
    }
}

impl Config {
    /// Store ceilings derived from this configuration.
    ///
    /// # Returns
    /// The per-paste and aggregate limits for a [`crate::MemoryStore`].
    pub fn limits(&self) -> StoreLimits {
        StoreLimits {
            max_paste_size: self.max_paste_size,
            max_total_size: self.max_total_size,
        }
    }

    /// Listener address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal.
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
