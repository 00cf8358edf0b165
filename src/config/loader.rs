//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::NetworkRegistry;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: the gateway was designed to run
/// with zero on-disk configuration, so defaults are used instead.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails (including unknown chain-family names)
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let config = if path.exists() {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content).with_context(|| "Failed to parse config.toml")?
  } else {
    info!(path = %path.display(), "No config file found, using defaults");
    AppConfig::default()
  };

  validate_config(&config)?;

  info!(
    service = %config.service.name,
    port = config.service.port,
    pendle_base_url = %config.pendle.base_url,
    networks = config.pendle.available_networks.len(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty service identity and log level
/// - Absolute remote base URL without a trailing slash
/// - Every configured chain family present in the network registry
/// - Positive timeout and page-bound values when set
fn validate_config(config: &AppConfig) -> Result<()> {
  // Service validation
  anyhow::ensure!(
    !config.service.name.is_empty(),
    "Service name must not be empty"
  );
  anyhow::ensure!(
    !config.service.log_level.is_empty(),
    "Log level must not be empty"
  );
  anyhow::ensure!(config.service.port > 0, "Service port must be nonzero");

  // Pendle connector validation
  anyhow::ensure!(
    config.pendle.base_url.starts_with("http"),
    "Pendle base_url must be an absolute URL, got {}",
    config.pendle.base_url
  );
  anyhow::ensure!(
    !config.pendle.base_url.ends_with('/'),
    "Pendle base_url must not end with a slash, got {}",
    config.pendle.base_url
  );
  anyhow::ensure!(
    !config.pendle.available_networks.is_empty(),
    "At least one chain family must be configured for Pendle"
  );

  let registry = NetworkRegistry::new();
  for chain in &config.pendle.available_networks {
    anyhow::ensure!(
      registry.networks(*chain).is_some(),
      "Chain family {} is not present in the network registry",
      chain
    );
  }

  if let Some(secs) = config.pendle.request_timeout_secs {
    anyhow::ensure!(
      secs > 0,
      "request_timeout_secs must be positive when set, got {}",
      secs
    );
  }
  if let Some(pages) = config.pendle.max_market_pages {
    anyhow::ensure!(
      pages > 0,
      "max_market_pages must be positive when set, got {}",
      pages
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Chain;

  #[test]
  fn test_load_missing_file_uses_defaults() {
    let config = load_config("nonexistent.toml").unwrap();
    assert_eq!(config.service.port, 8000);
    assert_eq!(config.pendle.base_url, "https://api-v2.pendle.finance");
    assert_eq!(
      config.pendle.available_networks,
      vec![Chain::Arbitrum, Chain::Ethereum]
    );
    assert!(config.pendle.max_market_pages.is_none());
  }

  #[test]
  fn test_parse_overrides() {
    let config: AppConfig = toml::from_str(
      r#"
      [service]
      port = 9000

      [pendle]
      base_url = "http://localhost:4010"
      available_networks = ["arbitrum"]
      max_market_pages = 5
      "#,
    )
    .unwrap();

    assert_eq!(config.service.port, 9000);
    assert_eq!(config.service.log_level, "info");
    assert_eq!(config.pendle.base_url, "http://localhost:4010");
    assert_eq!(config.pendle.available_networks, vec![Chain::Arbitrum]);
    assert_eq!(config.pendle.max_market_pages, Some(5));
    assert!(validate_config(&config).is_ok());
  }

  #[test]
  fn test_unknown_chain_family_rejected_at_parse() {
    let result = toml::from_str::<AppConfig>(
      r#"
      [pendle]
      available_networks = ["solana"]
      "#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn test_validate_rejects_trailing_slash() {
    let mut config = AppConfig::default();
    config.pendle.base_url = "https://api-v2.pendle.finance/".to_string();
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_validate_rejects_relative_base_url() {
    let mut config = AppConfig::default();
    config.pendle.base_url = "api-v2.pendle.finance".to_string();
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_validate_rejects_zero_page_bound() {
    let mut config = AppConfig::default();
    config.pendle.max_market_pages = Some(0);
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_validate_rejects_zero_port() {
    let mut config = AppConfig::default();
    config.service.port = 0;
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_validate_rejects_empty_networks() {
    let mut config = AppConfig::default();
    config.pendle.available_networks.clear();
    assert!(validate_config(&config).is_err());
  }
}
