/// Optional query flags for CoinGecko endpoints.
///
/// Each flag that is set appends `&flag=true` to the request; unset flags
/// are omitted entirely, matching the provider's expectations.

/// Flags for `/simple/price` ([`super::CoinGeckoClient::get_price`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceOptions {
    pub include_market_cap: bool,
    pub include_24hr_vol: bool,
    pub include_24hr_change: bool,
    pub include_last_updated_at: bool,
}

/// Flags for `/coins/{id}` ([`super::CoinGeckoClient::get_coin_data`]).
/// `localization=false` is always sent regardless of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinDataOptions {
    pub tickers: bool,
    pub market_data: bool,
    pub community_data: bool,
    pub developer_data: bool,
}
