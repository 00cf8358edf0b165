//! Pendle HTTP Client - REST API Client for the Pendle Yield Protocol
//!
//! Wraps reqwest with fixed JSON headers and normalized error handling
//! for all Pendle REST API interactions. One client instance is bound
//! to one chain id at a time; rebinding requires exclusive access, so
//! callers wanting several chains concurrently hold one instance each.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::config::ProtocolConfig;

/// Fallback message for remote failures with no usable error body.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Normalized error for all Pendle API operations.
///
/// Transport failures, remote error bodies, and undecodable responses
/// all collapse into this one kind; only the message text differs.
#[derive(Debug, thiserror::Error)]
#[error("Pendle API error: {message}")]
pub struct PendleError {
  message: String,
}

impl PendleError {
  pub(super) fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  /// The message text without the API-identification prefix.
  pub fn message(&self) -> &str {
    &self.message
  }
}

/// HTTP client for the Pendle REST API, bound to one chain id.
pub struct PendleClient {
  /// Underlying HTTP client with fixed JSON headers.
  http: Client,
  /// Remote API base URL, immutable after construction.
  base_url: String,
  /// Chain id interpolated into request paths and parameters.
  pub(super) chain_id: String,
  /// Page cap per market-listing call. None = unbounded.
  pub(super) max_market_pages: Option<u64>,
}

impl PendleClient {
  /// Create a new Pendle client bound to `chain_id`.
  pub fn new(config: &ProtocolConfig, chain_id: impl Into<String>) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder().default_headers(headers);
    if let Some(secs) = config.request_timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    Ok(Self {
      http,
      base_url: config.base_url.clone(),
      chain_id: chain_id.into(),
      max_market_pages: config.max_market_pages,
    })
  }

  /// The chain id bound to this client.
  pub fn chain_id(&self) -> &str {
    &self.chain_id
  }

  /// Rebind this client to a different chain id.
  ///
  /// Exclusive access means a shared instance cannot be rebound while
  /// other calls hold it, so requests never observe a half-switched
  /// chain context.
  pub fn set_chain_id(&mut self, chain_id: impl Into<String>) {
    self.chain_id = chain_id.into();
  }

  /// Execute a GET against `path` and decode the JSON response.
  ///
  /// All transport and remote failures surface as [`PendleError`]:
  /// a non-success status uses the body's `message` field when present
  /// and the fallback literal otherwise; a failed send or a 2xx body
  /// that won't decode uses the underlying error's text.
  pub(super) async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, String)],
  ) -> Result<T, PendleError> {
    let url = format!("{}{}", self.base_url, path);
    let mut request = self.http.get(&url);
    if !query.is_empty() {
      request = request.query(query);
    }

    let response = request.send().await.map_err(|e| {
      warn!(error = %e, path, "Pendle request failed");
      PendleError::new(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      warn!(status = %status, path, "Pendle API returned an error response");
      return Err(PendleError::new(remote_error_message(&body)));
    }

    response
      .json::<T>()
      .await
      .map_err(|e| PendleError::new(e.to_string()))
  }
}

/// Extract the human-readable message from a remote error body.
///
/// Falls back to the fixed literal when the body is not JSON or
/// carries no string `message` field.
fn remote_error_message(body: &str) -> String {
  serde_json::from_str::<Value>(body)
    .ok()
    .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
    .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}
