//! Exchange-agnostic entry point.
//!
//! The wrapper owns the active exchange connector and gates every
//! trading operation behind the dry-run flag: in dry-run mode orders
//! are acknowledged locally and balances report a fixed sentinel, while
//! market data always comes from the live exchange so simulated trading
//! still sees real prices.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::config::WrapperConfig;
use crate::core::errors::ExchangeError;
use crate::core::traits::{AccountInfo, ExchangeApi, MarketDataSource, OrderPlacer};
use crate::core::types::{ExchangeKind, OpenOrder, OrderId, Pair, Ticker};
use crate::exchanges::{bittrex, poloniex};

/// Balance reported for every currency while in dry-run mode.
pub const DRY_RUN_BALANCE: f64 = 999.9;

pub struct ExchangeWrapper {
    kind: ExchangeKind,
    api: Arc<dyn ExchangeApi>,
    dry_run: bool,
    dry_run_order_seq: AtomicU64,
}

impl fmt::Debug for ExchangeWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeWrapper")
            .field("kind", &self.kind)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl ExchangeWrapper {
    /// Build the wrapper from configuration: pick the enabled exchange,
    /// wire its connector and validate the pair whitelist against the
    /// markets the exchange actually lists.
    pub async fn new(config: &WrapperConfig) -> Result<Self, ExchangeError> {
        let (kind, settings) = config.enabled_exchange()?;
        let api: Arc<dyn ExchangeApi> = match kind {
            ExchangeKind::Poloniex => Arc::new(poloniex::build_connector(settings)?),
            ExchangeKind::Bittrex => Arc::new(bittrex::build_connector(settings)?),
        };
        Self::with_api(api, &settings.pair_whitelist, config.dry_run).await
    }

    /// Build the wrapper around an already-constructed exchange API.
    ///
    /// [`new`](Self::new) funnels through here; tests use it directly to
    /// substitute a canned exchange.
    pub async fn with_api(
        api: Arc<dyn ExchangeApi>,
        pair_whitelist: &[Pair],
        dry_run: bool,
    ) -> Result<Self, ExchangeError> {
        let kind = api.kind();
        if dry_run {
            info!(exchange = %kind, "running in dry-run mode, orders are simulated");
        }

        let markets: HashSet<Pair> = api.get_markets().await?.into_iter().collect();
        for pair in pair_whitelist {
            if !markets.contains(pair) {
                return Err(ExchangeError::Configuration(format!(
                    "pair {pair} is not available at {kind}"
                )));
            }
        }

        Ok(Self {
            kind,
            api,
            dry_run,
            dry_run_order_seq: AtomicU64::new(0),
        })
    }

    pub fn kind(&self) -> ExchangeKind {
        self.kind
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Simulated order ids are prefixed so they can never be confused
    /// with ids issued by a real exchange.
    fn simulated_order_id(&self, side: &str) -> OrderId {
        let seq = self.dry_run_order_seq.fetch_add(1, Ordering::Relaxed);
        format!("dry-run-{side}-{seq}")
    }
}

#[async_trait]
impl MarketDataSource for ExchangeWrapper {
    /// Always live, dry-run or not.
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError> {
        self.api.get_markets().await
    }

    /// Always live, dry-run or not.
    async fn get_ticker(&self, pair: &Pair) -> Result<Ticker, ExchangeError> {
        self.api.get_ticker(pair).await
    }

    fn get_pair_detail_url(&self, pair: &Pair) -> Result<String, ExchangeError> {
        self.api.get_pair_detail_url(pair)
    }
}

#[async_trait]
impl OrderPlacer for ExchangeWrapper {
    #[instrument(skip(self), fields(exchange = %self.kind, pair = %pair, dry_run = self.dry_run))]
    async fn buy(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError> {
        if self.dry_run {
            let id = self.simulated_order_id("buy");
            debug!(order_id = %id, rate, amount, "simulated buy");
            return Ok(id);
        }
        self.api.buy(pair, rate, amount).await
    }

    #[instrument(skip(self), fields(exchange = %self.kind, pair = %pair, dry_run = self.dry_run))]
    async fn sell(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError> {
        if self.dry_run {
            let id = self.simulated_order_id("sell");
            debug!(order_id = %id, rate, amount, "simulated sell");
            return Ok(id);
        }
        self.api.sell(pair, rate, amount).await
    }

    #[instrument(skip(self), fields(exchange = %self.kind, dry_run = self.dry_run))]
    async fn cancel_order(&self, order_id: &str) -> Result<(), ExchangeError> {
        if self.dry_run {
            debug!(order_id, "simulated cancel");
            return Ok(());
        }
        self.api.cancel_order(order_id).await
    }

    async fn get_open_orders(&self, pair: &Pair) -> Result<Vec<OpenOrder>, ExchangeError> {
        if self.dry_run {
            // Simulated orders are acknowledged instantly, none stay open.
            return Ok(Vec::new());
        }
        self.api.get_open_orders(pair).await
    }
}

#[async_trait]
impl AccountInfo for ExchangeWrapper {
    async fn get_balance(&self, currency: &str) -> Result<f64, ExchangeError> {
        if self.dry_run {
            return Ok(DRY_RUN_BALANCE);
        }
        self.api.get_balance(currency).await
    }
}

impl ExchangeApi for ExchangeWrapper {
    fn kind(&self) -> ExchangeKind {
        self.kind
    }
}
