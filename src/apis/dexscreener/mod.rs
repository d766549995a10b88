/// DexScreener API client
///
/// API Documentation: https://docs.dexscreener.com/api/reference
///
/// Endpoints implemented:
/// 1. /token-profiles/latest/v1 - Get latest token profiles
/// 2. /token-boosts/latest/v1 - Get latest boosted tokens
/// 3. /token-boosts/top/v1 - Get top boosted tokens
/// 4. /orders/v1/{chainId}/{tokenAddress} - Get orders for a token
/// 5. /latest/dex/pairs/{chainId}/{pairAddress} - Get single pair by chain/address
/// 6. /latest/dex/search?q={query} - Search pairs
/// 7. /latest/dex/tokens/{tokenAddress} - Get pools for a token
/// 8. /latest/dex/tokens/{chainId}/{tokenAddress} - Get token details
pub mod facts;

pub use self::facts::Fact;

use crate::apis::client::{ClientConfig, HttpClient};
use crate::errors::ApiError;
use log::debug;
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde_json::Value;
use std::time::Duration;

pub const DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com";

const LOG_TAG: &str = "DEXSCREENER";

/// Share of the shuffled profile list kept by [`DexScreenerClient::get_trending`].
const TRENDING_KEEP_RATIO: f64 = 0.7;

/// Simulated fetch delay for the static fact list.
const FACTS_FETCH_DELAY: Duration = Duration::from_millis(500);

/// DexScreener API client.
///
/// Every method issues one GET and returns the provider's JSON payload
/// unmodified, except the display variants documented below.
pub struct DexScreenerClient {
    http: HttpClient,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_base_url(DEXSCREENER_BASE_URL, config)
    }

    /// Point the client at a different base URL, e.g. a local mock server.
    pub fn with_base_url(base_url: impl Into<String>, config: ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            base_url: base_url.into(),
        }
    }

    async fn get(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[{}] {}: GET {}", LOG_TAG, operation, url);
        self.http.get_json(LOG_TAG, operation, &url, query).await
    }

    /// Fetch the latest token profiles.
    pub async fn get_latest_profiles(&self) -> Result<Value, ApiError> {
        self.get("get_latest_profiles", "/token-profiles/latest/v1", &[])
            .await
    }

    /// Fetch the most recently boosted tokens.
    pub async fn get_latest_boosted_tokens(&self) -> Result<Value, ApiError> {
        self.get("get_latest_boosted_tokens", "/token-boosts/latest/v1", &[])
            .await
    }

    /// Fetch tokens with the most active boosts.
    pub async fn get_top_boosted_tokens(&self) -> Result<Value, ApiError> {
        self.get("get_top_boosted_tokens", "/token-boosts/top/v1", &[])
            .await
    }

    /// Check paid-order status for a token.
    pub async fn get_token_orders(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("/orders/v1/{}/{}", chain_id, token_address);
        self.get("get_token_orders", &path, &[]).await
    }

    /// Fetch a single pair by chain and pair address.
    pub async fn get_pair(&self, chain_id: &str, pair_address: &str) -> Result<Value, ApiError> {
        let path = format!("/latest/dex/pairs/{}/{}", chain_id, pair_address);
        self.get("get_pair", &path, &[]).await
    }

    /// Search pairs matching a free-text query.
    pub async fn search(&self, query: &str) -> Result<Value, ApiError> {
        self.get(
            "search",
            "/latest/dex/search",
            &[("q", query.to_string())],
        )
        .await
    }

    /// Fetch all pools for a token address.
    pub async fn get_token_pools(&self, token_address: &str) -> Result<Value, ApiError> {
        let path = format!("/latest/dex/tokens/{}", token_address);
        self.get("get_token_pools", &path, &[]).await
    }

    /// Fetch token details scoped to one chain.
    pub async fn get_token_details(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("/latest/dex/tokens/{}/{}", chain_id, token_address);
        self.get("get_token_details", &path, &[]).await
    }

    /// "Top coins" display variant: the latest profiles in uniformly
    /// shuffled order.
    ///
    /// This is simulated behavior carried over from the upstream wrapper,
    /// not a distinct data source: the provider has no top-coins endpoint,
    /// so the view is derived from [`Self::get_latest_profiles`] by
    /// cosmetic reordering. Non-array payloads pass through unchanged.
    pub async fn get_top_coins(&self) -> Result<Value, ApiError> {
        let data = self.get_latest_profiles().await?;
        Ok(match data {
            Value::Array(mut items) => {
                items.shuffle(&mut thread_rng());
                Value::Array(items)
            }
            other => other,
        })
    }

    /// "Trending" display variant: a shuffled 70% prefix of the latest
    /// profiles. Simulated behavior, see [`Self::get_top_coins`].
    pub async fn get_trending(&self) -> Result<Value, ApiError> {
        let data = self.get_latest_profiles().await?;
        Ok(match data {
            Value::Array(mut items) => {
                items.shuffle(&mut thread_rng());
                let keep = (items.len() as f64 * TRENDING_KEEP_RATIO).ceil() as usize;
                items.truncate(keep);
                Value::Array(items)
            }
            other => other,
        })
    }

    /// "Most liked" display variant: the latest profiles in reversed order.
    /// Simulated behavior, see [`Self::get_top_coins`].
    pub async fn get_most_liked(&self) -> Result<Value, ApiError> {
        let data = self.get_latest_profiles().await?;
        Ok(match data {
            Value::Array(mut items) => {
                items.reverse();
                Value::Array(items)
            }
            other => other,
        })
    }

    /// Curated Web3/memecoin fact list. Static local data returned after a
    /// short simulated fetch delay; cannot fail.
    pub async fn get_web3_facts(&self) -> Vec<Fact> {
        tokio::time::sleep(FACTS_FETCH_DELAY).await;
        facts::WEB3_FACTS.to_vec()
    }
}

impl Default for DexScreenerClient {
    fn default() -> Self {
        Self::new()
    }
}
