//! Shared constants used across clip crates.

/// Default bind host for the server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default API port for clip.
pub const DEFAULT_PORT: u16 = 8080;

/// Default base URL for CLI/API clients.
pub const DEFAULT_CLI_SERVER_URL: &str = "http://localhost:8080";

/// Key used when a request addresses the default paste (`/@`).
pub const DEFAULT_PASTE_KEY: &str = "";
