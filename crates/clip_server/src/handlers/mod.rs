//! HTTP request handlers.

/// Usage page served at `/`.
pub mod index;
/// Paste read/write endpoints under `/@`.
pub mod paste;
