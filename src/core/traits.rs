use crate::core::{
    errors::ExchangeError,
    types::{ExchangeKind, OpenOrder, OrderId, Pair, Ticker},
};
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// List every tradable pair, normalized to canonical form
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError>;

    /// Current bid/ask/last for one pair
    async fn get_ticker(&self, pair: &Pair) -> Result<Ticker, ExchangeError>;

    /// Human-facing market page for the pair. Pure formatting, no network
    fn get_pair_detail_url(&self, pair: &Pair) -> Result<String, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer: Send + Sync {
    /// Place a limit buy order and return the exchange's order id
    async fn buy(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError>;

    /// Place a limit sell order and return the exchange's order id
    async fn sell(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError>;

    /// Cancel an order by id. Fire-and-confirm, no payload on success
    async fn cancel_order(&self, order_id: &str) -> Result<(), ExchangeError>;

    /// Currently open orders for one pair
    async fn get_open_orders(&self, pair: &Pair) -> Result<Vec<OpenOrder>, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo: Send + Sync {
    /// Available balance for one currency
    async fn get_balance(&self, currency: &str) -> Result<f64, ExchangeError>;
}

/// Full capability surface of one exchange integration.
///
/// Every operation an exchange does not actually support must return
/// [`ExchangeError::UnsupportedOperation`] rather than silently no-op.
pub trait ExchangeApi: MarketDataSource + OrderPlacer + AccountInfo {
    fn kind(&self) -> ExchangeKind;
}
