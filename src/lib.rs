//! Async client for the DexScreener and CoinGecko public APIs.
//!
//! Every operation is a single read-only GET against one of the two
//! providers; the decoded JSON payload is returned unmodified except for
//! the documented display variants. The shared request gateway lives in
//! [`apis::client`], the error taxonomy in [`errors`].
//!
//! ```no_run
//! use dexgecko::{ApiClients, PriceOptions};
//!
//! # async fn example() -> Result<(), dexgecko::ApiError> {
//! let clients = ApiClients::new();
//! let pair = clients.dexscreener.get_pair("solana", "8sLbNZoA1cfnvMJLPfp98ZLAnFSYCFApfJKMbiXNLwxj").await?;
//! let prices = clients
//!     .coingecko
//!     .get_price(&["bitcoin", "ethereum"], &["usd"], PriceOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Failures are logged through the `log` facade with the failing operation's
//! name; consumers pick the logger implementation.

pub mod apis;
pub mod errors;

pub use apis::coingecko::{CoinDataOptions, CoinGeckoClient, PriceOptions};
pub use apis::dexscreener::{DexScreenerClient, Fact};
pub use apis::{ApiClients, ClientConfig};
pub use errors::ApiError;
