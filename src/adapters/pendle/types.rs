//! Pendle API Response Types
//!
//! Deserialization types for the Pendle REST API. Remote payloads are
//! open-ended key/value bags this gateway does not control, so only the
//! envelope keys it actually consumes (`markets`, `prices`) are typed;
//! everything else passes through opaque.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Opaque market record as returned by the remote API.
pub type Market = serde_json::Map<String, Value>;

/// Input-token descriptor for swap operations.
pub type SwapInputToken = serde_json::Map<String, Value>;

/// Opaque calldata payload for later on-chain submission.
pub type SwapCalldata = serde_json::Map<String, Value>;

/// Opaque swapping-rate figures for one market.
pub type MarketRates = serde_json::Map<String, Value>;

/// Opaque token listing for one market.
pub type MarketTokens = serde_json::Map<String, Value>;

/// Market listing envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketsResponse {
  /// Markets on this page. An absent key reads as an empty page.
  #[serde(default)]
  pub markets: Vec<Market>,
}

/// Asset price lookup envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PricesResponse {
  /// USD price keyed by asset address.
  pub prices: HashMap<String, f64>,
}
