//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Concrete integrations with the outside world (HTTP server, REST
//! clients). Each sub-module groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `http`: inbound axum routes and server lifecycle
//! - `pendle`: outbound Pendle yield-protocol REST API client

pub mod http;
pub mod pendle;
