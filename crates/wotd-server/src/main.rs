use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use wotd_config::Config;
use wotd_server::{AppState, build_router, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::new();
    logging::init(&config.logging);

    let dictionary = wotd_io::read_artifact(Path::new(&config.dictionary.path))
        .with_context(|| format!("failed to load dictionary {}", config.dictionary.path))?;
    if dictionary.is_empty() {
        tracing::warn!("Dictionary is empty, every request will fail until it is reloaded");
    }

    let bind_addr = config.server.bind_addr.clone();
    let state = Arc::new(AppState::new(config, dictionary));
    let router = build_router(state);

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            match signal::ctrl_c().await {
                Ok(()) => tracing::info!("Shutdown requested"),
                Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
            }
            cancel.cancel();
        }
    });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .context("server exited")?;

    tracing::info!("Server stopped");
    Ok(())
}
