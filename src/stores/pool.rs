//! Liquidity pool listing cache

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Liquidity pool as listed by the ledger API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPool {
    pub id: String,
    pub asset_a: String,
    pub asset_b: String,
    #[serde(default)]
    pub balance_a: u64,
    #[serde(default)]
    pub balance_b: u64,
    #[serde(default)]
    pub share_asset: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of pool listings
#[derive(Clone, Debug, Default)]
pub struct PoolsPayload {
    pub loading: bool,
    pub liquidity_pools: Option<Vec<LiquidityPool>>,
    /// Restart pagination from the beginning
    pub reset: bool,
}

/// How a page is applied to the cache
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// Add to or overwrite cached pools (market-wide listings)
    Merge,
    /// Replace the whole cache (an account's own pools)
    Replace,
}

/// In-memory pool cache keyed by pool id, iterated in insertion order
#[derive(Clone, Debug, Default)]
pub struct PoolStore {
    pools: HashMap<String, LiquidityPool>,
    order: Vec<String>,
    loading: bool,
    last_pool_id: Option<String>,
}

impl PoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a page of listings
    pub fn on_liquidity_pools(&mut self, payload: PoolsPayload, mode: UpdateMode) {
        self.loading = payload.loading;

        if let Some(batch) = payload.liquidity_pools {
            // An empty page leaves the cache and cursor untouched
            let Some(last) = batch.last() else {
                return;
            };
            self.last_pool_id = Some(last.id.clone());

            match mode {
                UpdateMode::Merge => {
                    for pool in batch {
                        self.upsert(pool);
                    }
                }
                UpdateMode::Replace => {
                    self.reset();
                    for pool in batch {
                        self.upsert(pool);
                    }
                }
            }
            tracing::debug!("Pool cache holds {} pools", self.pools.len());
        }

        if payload.reset {
            self.last_pool_id = None;
        }
    }

    /// Drop all cached pools
    pub fn reset(&mut self) {
        self.pools.clear();
        self.order.clear();
    }

    /// Cached pools in the order they were first seen
    pub fn pools(&self) -> impl Iterator<Item = &LiquidityPool> {
        self.order.iter().filter_map(|id| self.pools.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&LiquidityPool> {
        self.pools.get(id)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cursor for fetching the next page
    pub fn last_pool_id(&self) -> Option<&str> {
        self.last_pool_id.as_deref()
    }

    fn upsert(&mut self, pool: LiquidityPool) {
        if !self.pools.contains_key(&pool.id) {
            self.order.push(pool.id.clone());
        }
        self.pools.insert(pool.id.clone(), pool);
    }
}
