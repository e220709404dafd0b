// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Feedback Service
//!
//! Collects feedback submissions over HTTP and serves the bundled frontend.
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables (a `.env` file in the
//! working directory is read first if present):
//!
//! - `BIND_ADDR`: Server bind address (default: 0.0.0.0:3000)
//! - `PORT`: Port to bind on 0.0.0.0 when `BIND_ADDR` is unset
//! - `STATIC_DIR`: Frontend asset directory (default: bundled `frontend/`)
//! - `DATA_FILE`: JSON file to persist feedback to (default: memory only)
//! - `CORS_ENABLED`: Allow cross-origin requests (default: true)

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feedback_service::{handlers::AppState, router, Config, FeedbackStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::from_env();
    info!(
        bind_addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        data_file = ?config.storage.data_file,
        cors = config.cors.enabled,
        "Starting feedback service"
    );

    let store = FeedbackStore::open(&config.storage)
        .await
        .context("failed to open feedback store")?;

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_addr))?;

    let state = Arc::new(AppState::new(store, config));
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
