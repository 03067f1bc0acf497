//! HTTP server wiring for clip (routes, handlers, and shared state).

/// HTTP error mapping for API handlers.
pub mod error;
/// HTTP handlers for the usage page and paste endpoints.
pub mod handlers;

pub use clip_core::{config, size, AppError, Config, MemoryStore, PasteStore, StoreLimits};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PasteStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared state backed by a [`MemoryStore`] sized from `config`.
    ///
    /// # Arguments
    /// - `config`: Resolved configuration.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config) -> Self {
        let store = Arc::new(MemoryStore::with_limits(config.limits()));
        Self::with_store(config, store)
    }

    /// Construct shared state around an existing store.
    ///
    /// # Arguments
    /// - `config`: Resolved configuration.
    /// - `store`: Storage backend handlers will read from and write to.
    ///
    /// # Returns
    /// A new [`AppState`] wired to the provided store.
    pub fn with_store(config: Config, store: Arc<dyn PasteStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

fn body_limit(config: &Config) -> DefaultBodyLimit {
    match usize::try_from(config.max_paste_size) {
        Ok(0) | Err(_) => DefaultBodyLimit::disable(),
        Ok(limit) => DefaultBodyLimit::max(limit),
    }
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
///
/// # Returns
/// Configured `axum::Router`.
pub fn create_app(state: AppState) -> Router {
    let limit = body_limit(&state.config);

    Router::new()
        .route("/", get(handlers::index::index))
        .route(
            "/@",
            get(handlers::paste::get_default_paste)
                .post(handlers::paste::set_default_paste)
                .put(handlers::paste::set_default_paste),
        )
        .route(
            "/@/:key",
            get(handlers::paste::get_paste)
                .post(handlers::paste::set_paste)
                .put(handlers::paste::set_paste),
        )
        .with_state(state)
        .layer(
            tower::ServiceBuilder::new()
                .layer(limit)
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Returns
/// `Ok(())` when the server exits cleanly.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
mod tests {
    use super::{serve_router, AppState};
    use clip_core::Config;

    #[tokio::test]
    async fn serve_router_stops_on_shutdown_signal() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener");
        let state = AppState::new(Config::default());
        serve_router(listener, state, async {})
            .await
            .expect("clean shutdown");
    }

    #[test]
    fn app_state_store_honors_config_limits() {
        let config = Config {
            max_paste_size: 4,
            ..Config::default()
        };
        let state = AppState::new(config);
        assert!(state.store.set("k", b"12345").is_err());
        state.store.set("k", b"1234").expect("within limit");
    }
}
