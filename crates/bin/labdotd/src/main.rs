//! # labdotd — labdot daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise `tracing`
//! - Build the indicator board from the configured endpoints
//! - Construct the reqwest probe and the status updater
//! - Start the refresh scheduler
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use labdot_adapter_http_axum::router;
use labdot_adapter_http_axum::state::AppState;
use labdot_adapter_http_reqwest::ReqwestProbe;
use labdot_app::scheduler::RefreshScheduler;
use labdot_app::services::status_updater::StatusUpdater;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Indicators
    let board = Arc::new(config.build_board()?);

    // Probe & services
    let probe = ReqwestProbe::new(&config.probe.http())?;
    let updater = Arc::new(StatusUpdater::new(probe, config.probe.loading_policy));

    // Background refresh
    let scheduler = RefreshScheduler::start(
        Arc::clone(&updater),
        Arc::clone(&board),
        config.refresh_interval(),
    );

    // HTTP
    let app = router::build(AppState::from_arcs(updater, Arc::clone(&board)));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        indicators = board.len(),
        interval_secs = config.refresh.interval_secs,
        "labdotd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.abort();
    tracing::info!("labdotd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
