/// CoinGecko API client
///
/// API Documentation: https://docs.coingecko.com/reference/introduction
///
/// Endpoints implemented:
/// 1. /simple/price - Prices for coin ids in one or more currencies
/// 2. /simple/token_price/{platform} - Prices by contract address
/// 3. /simple/supported_vs_currencies - Supported quote currencies
/// 4. /coins/list and /coins/markets - Coin catalogue, with or without market data
/// 5. /coins/{id} - Full coin data
/// 6. /coins/{id}/history - Snapshot on a given date
/// 7. /coins/{id}/market_chart - Price/market-cap/volume series
pub mod types;

pub use self::types::{CoinDataOptions, PriceOptions};

use crate::apis::client::{ClientConfig, HttpClient};
use crate::errors::ApiError;
use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

const LOG_TAG: &str = "COINGECKO";

/// Quote currency used when the caller passes none.
const DEFAULT_VS_CURRENCY: &str = "usd";

/// Market-chart window used when the caller passes none.
const DEFAULT_CHART_DAYS: &str = "1";

/// CoinGecko API client.
///
/// Methods return the provider's JSON payload unmodified.
pub struct CoinGeckoClient {
    http: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_base_url(COINGECKO_BASE_URL, config)
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

    /// Current prices for `ids` in `vs_currencies` (comma-joined on the
    /// wire). An empty `vs_currencies` defaults to `usd`.
    pub async fn get_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
        options: PriceOptions,
    ) -> Result<Value, ApiError> {
        let mut query = vec![
            ("ids", ids.join(",")),
            ("vs_currencies", join_or_default(vs_currencies)),
        ];
        if options.include_market_cap {
            query.push(("include_market_cap", "true".to_string()));
        }
        if options.include_24hr_vol {
            query.push(("include_24hr_vol", "true".to_string()));
        }
        if options.include_24hr_change {
            query.push(("include_24hr_change", "true".to_string()));
        }
        if options.include_last_updated_at {
            query.push(("include_last_updated_at", "true".to_string()));
        }

        self.get("get_price", "/simple/price", &query).await
    }

    /// Current prices for token contracts on `platform` (e.g. "ethereum").
    pub async fn get_token_price(
        &self,
        platform: &str,
        contract_addresses: &[&str],
        vs_currencies: &[&str],
    ) -> Result<Value, ApiError> {
        let path = format!("/simple/token_price/{}", platform);
        let query = [
            ("contract_addresses", contract_addresses.join(",")),
            ("vs_currencies", join_or_default(vs_currencies)),
        ];
        self.get("get_token_price", &path, &query).await
    }

    /// All quote currencies the provider can price against.
    pub async fn get_supported_currencies(&self) -> Result<Value, ApiError> {
        self.get(
            "get_supported_currencies",
            "/simple/supported_vs_currencies",
            &[],
        )
        .await
    }

    /// Coin catalogue. With `include_market_data` the first 100 coins by
    /// market cap come from `/coins/markets`; without it the full id list
    /// comes from `/coins/list`.
    pub async fn get_coins_list(&self, include_market_data: bool) -> Result<Value, ApiError> {
        if include_market_data {
            let query = [
                ("vs_currency", DEFAULT_VS_CURRENCY.to_string()),
                ("order", "market_cap_desc".to_string()),
                ("per_page", "100".to_string()),
                ("page", "1".to_string()),
            ];
            self.get("get_coins_list", "/coins/markets", &query).await
        } else {
            self.get("get_coins_list", "/coins/list", &[]).await
        }
    }

    /// Full data for one coin. Localization is always disabled.
    pub async fn get_coin_data(
        &self,
        id: &str,
        options: CoinDataOptions,
    ) -> Result<Value, ApiError> {
        let path = format!("/coins/{}", id);
        let mut query = vec![("localization", "false".to_string())];
        if options.tickers {
            query.push(("tickers", "true".to_string()));
        }
        if options.market_data {
            query.push(("market_data", "true".to_string()));
        }
        if options.community_data {
            query.push(("community_data", "true".to_string()));
        }
        if options.developer_data {
            query.push(("developer_data", "true".to_string()));
        }
        self.get("get_coin_data", &path, &query).await
    }

    /// Snapshot of a coin on `date`, which the provider expects as
    /// `dd-mm-yyyy`. The string is passed through verbatim; see
    /// [`Self::get_coin_history_on`] for a checked variant.
    pub async fn get_coin_history(&self, id: &str, date: &str) -> Result<Value, ApiError> {
        let path = format!("/coins/{}/history", id);
        self.get("get_coin_history", &path, &[("date", date.to_string())])
            .await
    }

    /// Snapshot of a coin on `date`, formatted for the provider.
    pub async fn get_coin_history_on(&self, id: &str, date: NaiveDate) -> Result<Value, ApiError> {
        self.get_coin_history(id, &date.format("%d-%m-%Y").to_string())
            .await
    }

    /// Price/market-cap/volume series over `days` (default "1") in
    /// `vs_currency` (default "usd").
    pub async fn get_coin_market_chart(
        &self,
        id: &str,
        days: Option<&str>,
        vs_currency: Option<&str>,
    ) -> Result<Value, ApiError> {
        let path = format!("/coins/{}/market_chart", id);
        let query = [
            (
                "vs_currency",
                vs_currency.unwrap_or(DEFAULT_VS_CURRENCY).to_string(),
            ),
            ("days", days.unwrap_or(DEFAULT_CHART_DAYS).to_string()),
        ];
        self.get("get_coin_market_chart", &path, &query).await
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

fn join_or_default(vs_currencies: &[&str]) -> String {
    if vs_currencies.is_empty() {
        DEFAULT_VS_CURRENCY.to_string()
    } else {
        vs_currencies.join(",")
    }
}
