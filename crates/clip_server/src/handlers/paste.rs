//! Paste HTTP handlers.
//!
//! `/@` addresses the default paste (empty key); `/@/:key` addresses a named one.

use crate::{error::HttpError, AppError, AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use clip_core::constants::DEFAULT_PASTE_KEY;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

fn read_paste(state: &AppState, key: &str) -> Result<Response, HttpError> {
    let data = state.store.get(key)?;
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], data).into_response())
}

fn write_paste(state: &AppState, key: &str, body: Bytes) -> Result<Response, HttpError> {
    if body.is_empty() {
        return Err(AppError::BadRequest("empty body".to_string()).into());
    }
    state.store.set(key, &body)?;
    tracing::debug!(key, size = body.len(), "stored paste");
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], "OK\n").into_response())
}

/// Fetch the default paste.
///
/// # Errors
/// Returns 404 when no default paste has been stored.
pub async fn get_default_paste(State(state): State<AppState>) -> Result<Response, HttpError> {
    read_paste(&state, DEFAULT_PASTE_KEY)
}

/// Fetch a named paste.
///
/// # Arguments
/// - `state`: Application state.
/// - `key`: Paste key from the path.
///
/// # Returns
/// The stored bytes as `text/plain`.
///
/// # Errors
/// Returns 404 when the key has no paste.
pub async fn get_paste(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, HttpError> {
    read_paste(&state, &key)
}

/// Store the request body as the default paste.
///
/// # Errors
/// Returns 400 for an empty body and 413 when the paste exceeds the size ceiling.
pub async fn set_default_paste(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HttpError> {
    write_paste(&state, DEFAULT_PASTE_KEY, body)
}

/// Store the request body under a named key, replacing any previous paste.
///
/// # Arguments
/// - `state`: Application state.
/// - `key`: Paste key from the path.
/// - `body`: Raw request body.
///
/// # Returns
/// `OK` acknowledgement on success.
///
/// # Errors
/// Returns 400 for an empty body and 413 when the paste exceeds the size ceiling.
pub async fn set_paste(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<Response, HttpError> {
    write_paste(&state, &key, body)
}
