//! One trading interface for multiple cryptocurrency spot exchanges.
//!
//! [`ExchangeWrapper`] is the entry point: it picks the enabled exchange
//! from [`WrapperConfig`], validates the configured pair whitelist
//! against the exchange's live markets and then exposes trading, market
//! data and balances behind one API. With `dry_run` set, orders and
//! balances are simulated locally while market data stays live.
//!
//! ```no_run
//! use coinbridge::{ExchangeSettings, ExchangeWrapper, MarketDataSource, Pair, WrapperConfig};
//!
//! # async fn run() -> Result<(), coinbridge::ExchangeError> {
//! let config = WrapperConfig::default()
//!     .dry_run()
//!     .with_bittrex(ExchangeSettings::new("api-key", "api-secret"));
//! let wrapper = ExchangeWrapper::new(&config).await?;
//!
//! let pair: Pair = "BTC_ETH".parse()?;
//! let ticker = wrapper.get_ticker(&pair).await?;
//! println!("ask {}", ticker.ask);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod exchanges;

pub use crate::core::config::{ExchangeSettings, WrapperConfig};
pub use crate::core::errors::ExchangeError;
pub use crate::core::registry::ExchangeRegistry;
pub use crate::core::traits::{AccountInfo, ExchangeApi, MarketDataSource, OrderPlacer};
pub use crate::core::types::{ExchangeKind, OpenOrder, OrderId, Pair, Ticker};
pub use crate::core::wrapper::{ExchangeWrapper, DRY_RUN_BALANCE};
pub use crate::exchanges::bittrex::BittrexConnector;
pub use crate::exchanges::poloniex::PoloniexConnector;
