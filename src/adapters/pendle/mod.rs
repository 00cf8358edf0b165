//! Pendle Yield Protocol Adapter
//!
//! REST API client for the hosted Pendle backend. Covers market
//! listing and pricing, input-token discovery, and SDK calldata
//! generation for swap and rollover transactions.
//!
//! Sub-modules:
//! - `client`: HTTP plumbing, chain binding, and error normalization
//! - `markets`: market listing, detail, rates, and price queries
//! - `swaps`: input-token discovery and calldata endpoints
//! - `types`: API response type definitions

pub mod client;
pub mod markets;
pub mod swaps;
pub mod types;

pub use client::{PendleClient, PendleError};
