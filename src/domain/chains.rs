//! Chain families and the static network registry.
//!
//! Maps chain family → named network → token metadata. The tables are pure
//! data: built once at process start by [`NetworkRegistry::new`] and passed
//! by reference to whoever needs a lookup; there is no global instance.
//!
//! Address strings and decimal counts mirror each token's on-chain
//! definition. That correspondence is maintained by hand and checked by the
//! unit tests below, never validated at runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Address used by the remote APIs to denote a chain's native asset.
const NATIVE_ASSET_ADDRESS: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

/// Chain families supported by the gateway.
///
/// This enum is the single source of truth for the registry's family
/// dimension: protocol configuration is typed on it, so an unrecognized
/// family is a compile error in code and a load error in TOML. It can
/// never surface at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Arbitrum,
    Ethereum,
}

impl Chain {
    /// Every supported chain family.
    pub const ALL: [Self; 2] = [Self::Arbitrum, Self::Ethereum];
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arbitrum => write!(f, "arbitrum"),
            Self::Ethereum => write!(f, "ethereum"),
        }
    }
}

/// On-chain token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Ticker symbol, duplicated from the lookup key for self-contained use.
    pub symbol: String,
    /// Hex-encoded account address (0x followed by 40 hex characters).
    pub address: String,
    /// Decimal places of the token's on-chain representation.
    pub decimals: u8,
}

/// A single named network within a chain family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Numeric chain identifier as the remote APIs expect it (e.g. "42161").
    pub chain_id: String,
    /// Tokens known on this network, keyed by symbol.
    pub tokens: HashMap<String, TokenInfo>,
}

/// Immutable family → network → token lookup tables.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: HashMap<Chain, HashMap<String, NetworkConfig>>,
}

impl NetworkRegistry {
    /// Build the registry with the gateway's supported networks and tokens.
    pub fn new() -> Self {
        let mut networks = HashMap::new();

        networks.insert(
            Chain::Arbitrum,
            HashMap::from([
                (
                    "mainnet".to_string(),
                    NetworkConfig {
                        chain_id: "42161".to_string(),
                        tokens: HashMap::from([
                            token("ETH", NATIVE_ASSET_ADDRESS, 18),
                            token("USDC", "0xaf88d065e77c8cc2239327c5edb3a432268e5831", 6),
                        ]),
                    },
                ),
                (
                    "sepolia".to_string(),
                    NetworkConfig {
                        chain_id: "421614".to_string(),
                        tokens: HashMap::from([token("ETH", NATIVE_ASSET_ADDRESS, 18)]),
                    },
                ),
            ]),
        );

        networks.insert(
            Chain::Ethereum,
            HashMap::from([(
                "mainnet".to_string(),
                NetworkConfig {
                    chain_id: "1".to_string(),
                    tokens: HashMap::from([
                        token("ETH", NATIVE_ASSET_ADDRESS, 18),
                        token("USDC", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", 6),
                    ]),
                },
            )]),
        );

        Self { networks }
    }

    /// All networks of a chain family, keyed by network name.
    pub fn networks(&self, chain: Chain) -> Option<&HashMap<String, NetworkConfig>> {
        self.networks.get(&chain)
    }

    /// A single network by family and name ("mainnet", "sepolia", ...).
    pub fn network(&self, chain: Chain, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(&chain)?.get(name)
    }

    /// Token metadata by family, network name, and symbol.
    pub fn token(&self, chain: Chain, network: &str, symbol: &str) -> Option<&TokenInfo> {
        self.network(chain, network)?.tokens.get(symbol)
    }

    /// The chain families present in the registry.
    pub fn families(&self) -> impl Iterator<Item = Chain> + '_ {
        self.networks.keys().copied()
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn token(symbol: &str, address: &str, decimals: u8) -> (String, TokenInfo) {
    (
        symbol.to_string(),
        TokenInfo {
            symbol: symbol.to_string(),
            address: address.to_string(),
            decimals,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_networks() {
        let registry = NetworkRegistry::new();
        for chain in Chain::ALL {
            let networks = registry.networks(chain);
            assert!(networks.is_some_and(|n| !n.is_empty()), "{chain} has no networks");
        }
    }

    #[test]
    fn test_seeded_chain_ids() {
        let registry = NetworkRegistry::new();
        assert_eq!(
            registry.network(Chain::Arbitrum, "mainnet").unwrap().chain_id,
            "42161"
        );
        assert_eq!(
            registry.network(Chain::Arbitrum, "sepolia").unwrap().chain_id,
            "421614"
        );
        assert_eq!(
            registry.network(Chain::Ethereum, "mainnet").unwrap().chain_id,
            "1"
        );
    }

    #[test]
    fn test_token_lookup() {
        let registry = NetworkRegistry::new();
        let usdc = registry.token(Chain::Arbitrum, "mainnet", "USDC").unwrap();
        assert_eq!(usdc.symbol, "USDC");
        assert_eq!(usdc.decimals, 6);
        assert_eq!(usdc.address, "0xaf88d065e77c8cc2239327c5edb3a432268e5831");
    }

    #[test]
    fn test_unknown_keys_resolve_to_none() {
        let registry = NetworkRegistry::new();
        assert!(registry.network(Chain::Ethereum, "sepolia").is_none());
        assert!(registry.token(Chain::Ethereum, "mainnet", "DOGE").is_none());
    }

    #[test]
    fn test_addresses_are_hex_account_identifiers() {
        let registry = NetworkRegistry::new();
        for chain in registry.families().collect::<Vec<_>>() {
            for network in registry.networks(chain).unwrap().values() {
                for token in network.tokens.values() {
                    assert!(token.address.starts_with("0x"), "{}", token.address);
                    assert_eq!(token.address.len(), 42, "{}", token.address);
                    assert!(
                        token.address[2..].chars().all(|c| c.is_ascii_hexdigit()),
                        "{}",
                        token.address
                    );
                }
            }
        }
    }

    #[test]
    fn test_chain_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Chain::Arbitrum).unwrap(), "\"arbitrum\"");
        let parsed: Chain = serde_json::from_str("\"ethereum\"").unwrap();
        assert_eq!(parsed, Chain::Ethereum);
        assert!(serde_json::from_str::<Chain>("\"solana\"").is_err());
    }
}
