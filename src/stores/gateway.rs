//! Gateway and bridge coin metadata cache

use crate::types::Asset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Input coins the bridge may offer for deposits
pub const DEFAULT_BRIDGE_INPUTS: &[&str] = &[
    "btc", "dash", "eth", "steem", "sbd", "doge", "bch", "ppy", "ltc",
];

/// Only output coins held in this wallet type are bridged
pub const BRIDGE_WALLET_TYPE: &str = "bitshares2";

/// Coin backed by a gateway
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackedCoin {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub backing_coin_type: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Coin type descriptor returned by a bridge
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinType {
    pub coin_type: String,
    pub wallet_type: String,
    pub wallet_symbol: String,
}

/// Input/output pair offered by a bridge
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeCoin {
    pub input_coin_type: String,
    pub output_coin_type: String,
    #[serde(default)]
    pub is_available: bool,
}

/// Result of fetching a backer's coin list
#[derive(Clone, Debug, Default)]
pub struct FetchCoinsResult {
    pub backer: Option<String>,
    /// Raw coin list as returned by the backer
    pub coins: Option<Vec<BackedCoin>>,
    /// Coins the backer actually backs, filtered from `coins`
    pub backed_coins: Option<Vec<BackedCoin>>,
    /// Backer that failed to respond
    pub down: Option<String>,
}

/// Result of fetching bridge trading pairs
#[derive(Clone, Debug, Default)]
pub struct FetchPairsResult {
    pub coins: Option<Vec<CoinType>>,
    pub bridge_coins: Option<Vec<BridgeCoin>>,
    pub wallets: Option<Vec<String>>,
    pub down: Option<String>,
}

/// Asset blacklists published on chain
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Blacklists {
    #[serde(default)]
    pub assets: Vec<String>,
}

/// Gateway configuration published on chain
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OnChainGatewayConfig {
    #[serde(default)]
    pub gateways: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub blacklists: Option<Blacklists>,
}

/// In-memory mirror of gateway state pushed by fetchers
#[derive(Clone, Debug)]
pub struct GatewayStore {
    backed_coins: HashMap<String, Vec<BackedCoin>>,
    /// wallet symbol -> input coin type -> bridge coin
    bridge_coins: HashMap<String, HashMap<String, BridgeCoin>>,
    bridge_inputs: Vec<String>,
    down: HashMap<String, bool>,
    on_chain_config: Option<OnChainGatewayConfig>,
}

impl Default for GatewayStore {
    fn default() -> Self {
        Self::new(DEFAULT_BRIDGE_INPUTS.iter().map(|s| s.to_string()).collect())
    }
}

impl GatewayStore {
    pub fn new(bridge_inputs: Vec<String>) -> Self {
        Self {
            backed_coins: HashMap::new(),
            bridge_coins: HashMap::new(),
            bridge_inputs,
            down: HashMap::new(),
            on_chain_config: None,
        }
    }

    /// Record a backer's filtered backed-coin list, or mark a backer as down.
    ///
    /// The fetch only counts when `coins` came back; what gets cached is
    /// `backed_coins`.
    pub fn on_fetch_coins(&mut self, result: FetchCoinsResult) {
        if let (Some(backer), Some(_)) = (result.backer, result.coins) {
            let backed_coins = result.backed_coins.unwrap_or_default();
            tracing::debug!("Caching {} backed coins for {}", backed_coins.len(), backer);
            self.down.insert(backer.clone(), false);
            self.backed_coins.insert(backer, backed_coins);
        }

        self.mark_down(result.down);
    }

    /// Record a backer's raw coin list as-is, or mark a backer as down
    pub fn on_fetch_coins_simple(&mut self, result: FetchCoinsResult) {
        if let (Some(backer), Some(coins)) = (result.backer, result.coins) {
            tracing::debug!("Caching {} coins for {}", coins.len(), backer);
            self.down.insert(backer.clone(), false);
            self.backed_coins.insert(backer, coins);
        }

        self.mark_down(result.down);
    }

    fn mark_down(&mut self, backer: Option<String>) {
        if let Some(backer) = backer {
            tracing::warn!("Gateway {} is down", backer);
            self.down.insert(backer, true);
        }
    }

    /// Index bridgeable pairs by output wallet symbol and input coin type
    pub fn on_fetch_pairs(&mut self, result: FetchPairsResult) {
        if let (Some(coins), Some(bridge_coins), Some(wallets)) =
            (result.coins, result.bridge_coins, result.wallets)
        {
            let coins_by_type: HashMap<&str, &CoinType> =
                coins.iter().map(|c| (c.coin_type.as_str(), c)).collect();

            for mut coin in bridge_coins {
                let Some(output) = coins_by_type.get(coin.output_coin_type.as_str()) else {
                    continue;
                };
                if output.wallet_type != BRIDGE_WALLET_TYPE
                    || !self.bridge_inputs.contains(&coin.input_coin_type)
                {
                    continue;
                }

                coin.is_available = wallets.contains(&output.wallet_type);
                self.bridge_coins
                    .entry(output.wallet_symbol.clone())
                    .or_default()
                    .insert(coin.input_coin_type.clone(), coin);
            }
        }

        if let Some(backer) = result.down {
            tracing::warn!("Bridge {} is down", backer);
            self.down.insert(backer, true);
        }
    }

    /// Mark a backer down and drop everything cached for it
    pub fn temporarily_disable(&mut self, backer: &str) {
        self.down.insert(backer.to_string(), true);
        self.backed_coins.remove(backer);
        self.bridge_coins.remove(backer);
    }

    pub fn load_on_chain_config(&mut self, config: Option<OnChainGatewayConfig>) {
        self.on_chain_config = Some(config.unwrap_or_default());
    }

    pub fn is_down(&self, backer: &str) -> bool {
        self.down.get(backer).copied().unwrap_or(false)
    }

    pub fn backed_coins(&self, backer: &str) -> Option<&[BackedCoin]> {
        self.backed_coins.get(backer).map(Vec::as_slice)
    }

    pub fn bridge_coin(&self, wallet_symbol: &str, input_coin_type: &str) -> Option<&BridgeCoin> {
        self.bridge_coins.get(wallet_symbol)?.get(input_coin_type)
    }

    pub fn bridge_inputs(&self) -> &[String] {
        &self.bridge_inputs
    }

    pub fn global_on_chain_config(&self) -> Option<&OnChainGatewayConfig> {
        self.on_chain_config.as_ref()
    }

    /// Per-gateway entry of the on-chain configuration
    pub fn on_chain_config(&self, gateway_key: &str) -> Option<&serde_json::Value> {
        self.on_chain_config.as_ref()?.gateways.get(gateway_key)
    }

    pub fn is_symbol_blacklisted(&self, symbol: &str) -> bool {
        self.on_chain_config
            .as_ref()
            .and_then(|config| config.blacklists.as_ref())
            .map(|blacklists| blacklists.assets.iter().any(|s| s == symbol))
            .unwrap_or(false)
    }

    pub fn is_asset_blacklisted(&self, asset: &Asset) -> bool {
        self.is_symbol_blacklisted(&asset.symbol)
    }
}
