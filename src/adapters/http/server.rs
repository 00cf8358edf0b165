//! Gateway HTTP Server - Listener and Lifecycle
//!
//! Binds the public router on the configured port via axum 0.7 and
//! serves until a shutdown signal arrives. A failed bind surfaces to
//! the caller, which treats it as fatal.

use tokio::sync::broadcast;
use tracing::{info, instrument};

use super::routes;

/// Axum-based gateway HTTP server.
pub struct GatewayServer {
    /// Bind port (default 8000 from config).
    port: u16,
}

impl GatewayServer {
    /// Create a new gateway server.
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Bind and serve until the shutdown signal fires.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(
        self,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> anyhow::Result<()> {
        let app = routes::router();

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(address = %addr, "Gateway server started");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }
}
