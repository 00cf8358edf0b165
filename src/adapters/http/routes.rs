//! Gateway Routes - Connector Listing and Service Metadata
//!
//! The public HTTP surface: the connector listing under /connectors,
//! a service-info document at the root for API discovery, and a
//! liveness probe at /health.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;

use crate::domain::{Connector, connectors};

/// Service title advertised in the root metadata document.
const SERVICE_TITLE: &str = "Goemon Adapter";
/// Service description advertised in the root metadata document.
const SERVICE_DESCRIPTION: &str =
    "API endpoints for interacting with various trading protocols and DEX";

/// Envelope for the connector listing response.
#[derive(Debug, Serialize)]
struct ConnectorsResponse {
    connectors: Vec<Connector>,
}

/// Service metadata served at the root.
#[derive(Debug, Serialize)]
struct ServiceInfo {
    title: &'static str,
    description: &'static str,
    version: &'static str,
}

/// Build the gateway router with all public routes attached.
pub fn router() -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .merge(connector_routes())
}

/// Routes registered under the /connectors prefix.
fn connector_routes() -> Router {
    Router::new().route("/connectors", get(list_connectors))
}

/// GET /connectors: the static connector catalog.
///
/// Takes no input; query parameters and bodies are ignored, so the
/// response never varies.
async fn list_connectors() -> Json<ConnectorsResponse> {
    Json(ConnectorsResponse {
        connectors: connectors(),
    })
}

/// GET /: service identification and version metadata.
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: SERVICE_TITLE,
        description: SERVICE_DESCRIPTION,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health: liveness probe.
async fn health() -> &'static str {
    "OK"
}
