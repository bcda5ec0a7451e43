use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hopper_gateway::cli::{Cli, StorageBackendArg};
use hopper_gateway::{App, AppState};
use hopper_storage::{InMemoryLinkStore, MySqlLinkStore};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    hopper_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        max_attempts = config.max_attempts,
        cache_capacity = config.cache_capacity,
        "starting gateway server"
    );

    let settings = config.shortener_settings();
    let cache = config.cache_config();

    let state = match config.storage {
        StorageBackendArg::InMemory => AppState::from_store(
            Arc::new(InMemoryLinkStore::new()),
            settings,
            cache,
            config.public_base_url.as_str(),
        ),
        StorageBackendArg::Mysql => {
            let dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlLinkStore::connect(dsn)
                .await
                .context("failed to connect to mysql")?;
            store
                .migrate()
                .await
                .context("failed to create short_links table")?;
            AppState::from_store(store, settings, cache, config.public_base_url.as_str())
        }
    };

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
