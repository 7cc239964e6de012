use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_core::MongoStore;
use todo_server::{LogFormat, ServerConfig, SharedStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, dotenv) = ServerConfig::load().context("failed to load configuration")?;

    init_tracing(&config);

    match dotenv {
        Some(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        None => tracing::debug!("No .env file found; using process environment"),
    }

    let store = MongoStore::connect(
        &config.mongodb_uri,
        &config.mongodb_database,
        &config.mongodb_collection,
    )
    .await
    .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to MongoDB"))
    .context("failed to connect to MongoDB")?;
    let store: SharedStore = Arc::new(store);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    todo_server::run(listener, store).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
