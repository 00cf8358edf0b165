//! Configuration Module - TOML-based Gateway Configuration
//!
//! Loads configuration from `config.toml` when present and falls back
//! to built-in defaults otherwise, so the gateway runs with zero files
//! on disk. Remote API base URLs and network selections are
//! externalized here - nothing is hardcoded in the adapters.

pub mod loader;

use serde::Deserialize;

use crate::domain::Chain;

/// Top-level gateway configuration.
///
/// Every field has a default, so an absent or partial `config.toml`
/// still yields a runnable configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Service identity and HTTP listener settings.
  #[serde(default)]
  pub service: ServiceConfig,
  /// Pendle connector settings.
  #[serde(default)]
  pub pendle: ProtocolConfig,
}

/// Service identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
  /// Human-readable service name.
  #[serde(default = "default_service_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Port the HTTP server listens on.
  #[serde(default = "default_port")]
  pub port: u16,
}

/// Per-protocol connector configuration.
///
/// `available_networks` is typed on [`Chain`], so a family name outside
/// the registry's key set is rejected while parsing the file - it can
/// never reach a request path.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolConfig {
  /// Remote API base URL (absolute, no trailing slash).
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Chain families this connector serves.
  #[serde(default = "default_available_networks")]
  pub available_networks: Vec<Chain>,
  /// Outbound request timeout in seconds. None = transport default.
  #[serde(default)]
  pub request_timeout_secs: Option<u64>,
  /// Upper bound on pages fetched per market-listing call.
  /// None = unbounded, matching the remote API's paging contract.
  #[serde(default)]
  pub max_market_pages: Option<u64>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      name: default_service_name(),
      log_level: default_log_level(),
      port: default_port(),
    }
  }
}

impl Default for ProtocolConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      available_networks: default_available_networks(),
      request_timeout_secs: None,
      max_market_pages: None,
    }
  }
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      service: ServiceConfig::default(),
      pendle: ProtocolConfig::default(),
    }
  }
}

// Default value functions for serde

fn default_service_name() -> String {
  "goemon-adapter".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_port() -> u16 {
  8000
}

fn default_base_url() -> String {
  "https://api-v2.pendle.finance".to_string()
}

fn default_available_networks() -> Vec<Chain> {
  vec![Chain::Arbitrum, Chain::Ethereum]
}
