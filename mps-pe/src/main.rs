//! Playlist Engine (mps-pe) - Main entry point
//!
//! Stateless microservice for Mood Playlist Studio: fabricates a playlist
//! from user-selected mood sliders and vibe tags, and serves the browser UI
//! that drives it. Every request is independent; there is no storage layer.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use mps_common::config::resolve_listen;
use mps_pe::{build_router, AppState};

/// Command-line arguments for mps-pe
#[derive(Parser, Debug)]
#[command(name = "mps-pe")]
#[command(about = "Playlist Engine service for Mood Playlist Studio")]
#[command(version)]
struct Args {
    /// Port to listen on (falls back to MPS_PE_PORT, then the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind (falls back to the config file, then 0.0.0.0)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting MPS Playlist Engine (mps-pe) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Listen address resolution: CLI > env > config file > compiled default
    let listen = resolve_listen(args.port, args.bind.as_deref(), "MPS_PE_PORT");

    let state = AppState::new(listen.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(listen.addr())
        .await
        .with_context(|| format!("Failed to bind to {}", listen.addr()))?;
    info!("mps-pe listening on http://{}", listen.addr());
    info!("Health check: http://{}/health", listen.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
