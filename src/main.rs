//! Goemon Adapter - Entry Point
//!
//! Initializes configuration, logging, and the gateway HTTP server.
//! Runs until SIGINT once started.
//!
//! Wiring sequence:
//! 1. Check the START_SERVER gate (absent/other: exit cleanly, code 0)
//! 2. Load config.toml + validate (defaults when the file is absent)
//! 3. Init tracing (JSON structured logging)
//! 4. Spawn the gateway server on the configured port (/connectors)
//! 5. Wait for SIGINT → graceful shutdown; a server that dies on its
//!    own (failed bind) terminates the process with a non-zero status

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

mod adapters;
mod config;
mod domain;

use adapters::http::GatewayServer;

/// Environment variable gating server start-up.
const START_SERVER_ENV: &str = "START_SERVER";

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Honor the start-up gate ──────────────────────────
    if !server_enabled() {
        return Ok(());
    }

    // ── 2. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 3. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.service.log_level)
                }),
        )
        .json()
        .init();

    info!(
        service = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        port = config.service.port,
        "Starting Goemon Adapter"
    );

    // ── 4. Shutdown signal channel ──────────────────────────
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    // ── 5. Spawn the gateway server ─────────────────────────
    let server = GatewayServer::new(config.service.port);
    let mut server_handle = tokio::spawn(server.run(shutdown_rx));

    info!("Gateway is running");

    // ── 6. Wait for SIGINT or premature server exit ─────────
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received, initiating graceful shutdown");
        }
        result = &mut server_handle => {
            // Reaching here without a signal means the server died on
            // its own, most likely a failed bind.
            let err = match result {
                Ok(Err(e)) => e,
                Ok(Ok(())) => anyhow::anyhow!("server exited unexpectedly"),
                Err(e) => anyhow::anyhow!("server task panicked: {e}"),
            };
            error!(error = %err, "Gateway server failed");
            std::process::exit(1);
        }
    }

    // ── Graceful shutdown ───────────────────────────────────

    // 1. Signal the server to stop
    let _ = shutdown_tx.send(());
    info!("Shutdown signal broadcast");

    // 2. Wait for the listener to drain (up to 5s)
    let _ = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        server_handle,
    )
    .await;

    info!("Shutdown complete");
    Ok(())
}

/// Whether the START_SERVER gate enables the server.
fn server_enabled() -> bool {
    std::env::var(START_SERVER_ENV).is_ok_and(|v| gate_enables(&v))
}

/// Classify one gate value. Only the explicit opt-in spellings count;
/// anything else (including an unset variable) leaves the process a
/// no-op.
fn gate_enables(value: &str) -> bool {
    matches!(value, "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_opt_in_spellings() {
        assert!(gate_enables("true"));
        assert!(gate_enables("1"));
    }

    #[test]
    fn test_gate_declines_everything_else() {
        assert!(!gate_enables("false"));
        assert!(!gate_enables("TRUE"));
        assert!(!gate_enables("yes"));
        assert!(!gate_enables(""));
    }
}
