//! Gateway HTTP Adapter
//!
//! Inbound HTTP surface of the service: route definitions and the
//! axum server lifecycle.
//!
//! Sub-modules:
//! - `routes`: public route handlers and response envelopes
//! - `server`: listener binding and graceful shutdown

pub mod routes;
pub mod server;

pub use server::GatewayServer;
