//! HTTP front end for the todo store.
//!
//! `app` binds the handlers to their routes over an injected store;
//! `run` serves it until Ctrl+C or SIGTERM.

use std::future::Future;
use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use todo_core::TodoStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;

pub use config::{LogFormat, ServerConfig};
pub use error::{ApiError, ErrorBody, MessageBody};

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn TodoStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            patch(handlers::complete_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve until Ctrl+C or SIGTERM, then shut the store down.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    run_until(listener, store, shutdown_signal()).await
}

/// Serve until `signal` resolves. The store is shut down whether serving
/// ended cleanly or with an error.
pub async fn run_until<F>(
    listener: TcpListener,
    store: SharedStore,
    signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let result = axum::serve(listener, app(store.clone()))
        .with_graceful_shutdown(signal)
        .await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "HTTP server failed");
    }
    store.shutdown().await;
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
    }
}
