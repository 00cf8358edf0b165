//! Domain layer - Core models for the gateway.
//!
//! This module contains the pure domain data for the adapter service.
//! No external I/O here (hexagonal architecture inner ring): chain and
//! connector tables are plain values, serializable and testable in isolation.

pub mod chains;
pub mod connector;

// Re-export core types for convenience
pub use chains::{Chain, NetworkConfig, NetworkRegistry, TokenInfo};
pub use connector::{Connector, connectors};
