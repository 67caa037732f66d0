//! Caches for gateway coin metadata and liquidity pool listings

pub mod gateway;
pub mod pool;

pub use gateway::{
    BackedCoin, BridgeCoin, CoinType, FetchCoinsResult, FetchPairsResult, GatewayStore,
    OnChainGatewayConfig,
};
pub use pool::{LiquidityPool, PoolStore, PoolsPayload, UpdateMode};
