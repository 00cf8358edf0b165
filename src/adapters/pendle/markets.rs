//! Market Queries - Pendle Market Listing and Pricing
//!
//! Market listing, per-market detail, swapping rates, and asset price
//! lookups against the Pendle core API. The paged listing walk
//! accumulates pages until the server reports an empty one.

use std::collections::HashMap;

use tracing::debug;

use super::client::{PendleClient, PendleError};
use super::types::{Market, MarketRates, MarketTokens, MarketsResponse, PricesResponse};

impl PendleClient {
    /// Fetch every active market by walking the paged listing endpoint.
    ///
    /// Calls GET /core/v1/{chain_id}/markets at offsets 0, limit,
    /// 2*limit, ... until a page comes back empty, and returns the
    /// pages concatenated in arrival order. A short but non-empty page
    /// does not stop the walk; only an empty one does.
    ///
    /// The remote contract promises an eventual empty page. With
    /// `max_market_pages` set, a walk that has not terminated within
    /// that many requests fails instead of looping on.
    pub async fn fetch_all_active_markets(
        &self,
        limit: u64,
        is_active: bool,
    ) -> Result<Vec<Market>, PendleError> {
        let path = format!("/core/v1/{}/markets", self.chain_id);
        let mut all_markets = Vec::new();
        let mut skip = 0u64;
        let mut pages = 0u64;

        loop {
            if let Some(max_pages) = self.max_market_pages {
                if pages >= max_pages {
                    return Err(PendleError::new(format!(
                        "market listing did not terminate within {max_pages} pages"
                    )));
                }
            }

            let page: MarketsResponse = self
                .get_json(
                    &path,
                    &[
                        ("limit", limit.to_string()),
                        ("skip", skip.to_string()),
                        ("select", "pro".to_string()),
                        ("is_active", is_active.to_string()),
                    ],
                )
                .await?;
            pages += 1;

            if page.markets.is_empty() {
                break;
            }

            all_markets.extend(page.markets);
            skip += limit;
        }

        debug!(markets = all_markets.len(), pages, "Fetched active markets");
        Ok(all_markets)
    }

    /// Fetch active markets from the unpaged listing endpoint.
    pub async fn get_active_markets(&self) -> Result<Vec<Market>, PendleError> {
        let path = format!("/core/v1/{}/markets/active", self.chain_id);
        let response: MarketsResponse = self.get_json(&path, &[]).await?;
        Ok(response.markets)
    }

    /// Fetch detailed market data for a single market address.
    pub async fn get_market_data(&self, market_address: &str) -> Result<Market, PendleError> {
        let path = format!("/core/v1/{}/markets/{}", self.chain_id, market_address);
        self.get_json(
            &path,
            &[
                ("limit", "100".to_string()),
                ("select", "pro".to_string()),
                ("is_active", "true".to_string()),
            ],
        )
        .await
    }

    /// Fetch the current swapping rates for a market.
    pub async fn get_market_rates(
        &self,
        market_address: &str,
    ) -> Result<MarketRates, PendleError> {
        let path = format!(
            "/core/v1/sdk/{}/markets/{}/swapping-prices",
            self.chain_id, market_address
        );
        self.get_json(&path, &[]).await
    }

    /// Fetch the tokens tradeable on a market.
    pub async fn get_market_tokens(
        &self,
        market_address: &str,
    ) -> Result<MarketTokens, PendleError> {
        let path = format!(
            "/core/v1/sdk/{}/markets/{}/tokens",
            self.chain_id, market_address
        );
        self.get_json(&path, &[]).await
    }

    /// Fetch USD prices for a set of asset addresses.
    ///
    /// Addresses are joined into one comma-separated query value; the
    /// result maps each address to its price.
    pub async fn get_asset_lp_prices(
        &self,
        addresses: &[&str],
    ) -> Result<HashMap<String, f64>, PendleError> {
        let path = format!("/core/v1/{}/assets/prices", self.chain_id);
        let response: PricesResponse = self
            .get_json(&path, &[("addresses", addresses.join(","))])
            .await?;
        Ok(response.prices)
    }
}
