/// API clients for the external data providers
pub mod client;
pub mod coingecko;
pub mod dexscreener;

pub use client::{ClientConfig, HttpClient};
pub use coingecko::CoinGeckoClient;
pub use dexscreener::DexScreenerClient;

/// Both provider clients bundled together.
pub struct ApiClients {
    pub dexscreener: DexScreenerClient,
    pub coingecko: CoinGeckoClient,
}

impl ApiClients {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            dexscreener: DexScreenerClient::with_config(config.clone()),
            coingecko: CoinGeckoClient::with_config(config),
        }
    }
}

impl Default for ApiClients {
    fn default() -> Self {
        Self::new()
    }
}
