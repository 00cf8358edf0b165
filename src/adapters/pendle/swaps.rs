//! Swap Queries - Pendle SDK Calldata Generation
//!
//! Input-token discovery and hosted-SDK calldata generation for PT
//! (principal token) and SY (standardized yield) positions. The SDK
//! endpoints take caller-supplied parameter maps and return opaque
//! transaction payloads; parameters pass through verbatim.

use std::collections::HashMap;

use super::client::{PendleClient, PendleError};
use super::types::{SwapCalldata, SwapInputToken};

/// Token-type selector for swap input-token discovery.
const SWAP_INPUT_TOKEN_TYPE: &str = "swapExactInInputTokens";

impl PendleClient {
    /// Fetch the input tokens accepted for swaps into a market.
    pub async fn fetch_swap_input_tokens(
        &self,
        market_addr: &str,
    ) -> Result<Vec<SwapInputToken>, PendleError> {
        self.get_json(
            "/sdk/api/v1/rawTokens",
            &[
                ("chainId", self.chain_id.clone()),
                ("marketAddr", market_addr.to_string()),
                ("tokenType", SWAP_INPUT_TOKEN_TYPE.to_string()),
            ],
        )
        .await
    }

    /// Fetch calldata to mint SY from an input token.
    pub async fn get_mint_sy_from_token_calldata(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<SwapCalldata, PendleError> {
        self.get_sdk_calldata("/sdk/api/v1/mintSyFromToken", params).await
    }

    /// Fetch calldata to swap an exact token amount for PT.
    pub async fn get_swap_exact_token_for_pt_calldata(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<SwapCalldata, PendleError> {
        self.get_sdk_calldata("/sdk/api/v1/swapExactTokenForPt", params).await
    }

    /// Fetch calldata to roll a PT position over into a new market.
    pub async fn get_roll_over_pt_calldata(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<SwapCalldata, PendleError> {
        self.get_sdk_calldata("/sdk/api/v1/rollOverPt", params).await
    }

    /// Fetch calldata to swap an exact PT amount back to a token.
    pub async fn get_swap_exact_pt_for_token_calldata(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<SwapCalldata, PendleError> {
        self.get_sdk_calldata("/sdk/api/v1/swapExactPtForToken", params).await
    }

    /// Issue a GET against an SDK endpoint with the parameter map
    /// forwarded untouched.
    async fn get_sdk_calldata(
        &self,
        path: &str,
        params: &HashMap<String, String>,
    ) -> Result<SwapCalldata, PendleError> {
        let query: Vec<(&str, String)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();
        self.get_json(path, &query).await
    }
}
