use std::collections::HashMap;

use async_trait::async_trait;
use tracing::instrument;

use super::codec;
use super::converters;
use super::types::{PoloniexOrderPlaced, PoloniexResponse, PoloniexTicker};
use crate::core::errors::ExchangeError;
use crate::core::kernel::rest::RestTransport;
use crate::core::traits::{AccountInfo, ExchangeApi, MarketDataSource, OrderPlacer};
use crate::core::types::{ExchangeKind, OpenOrder, OrderId, Pair, Ticker};
use crate::exchanges::format_amount;

const PUBLIC_ENDPOINT: &str = "/public";
const TRADING_ENDPOINT: &str = "/tradingApi";

/// Poloniex integration.
///
/// Covers placing orders, tickers and balances. The remaining surface
/// (market listing, cancellation, open orders, detail pages) is reported
/// as unsupported rather than guessed at.
pub struct PoloniexConnector<R: RestTransport> {
    rest: R,
}

impl<R: RestTransport> PoloniexConnector<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    async fn place_limit_order(
        &self,
        command: &str,
        pair: &Pair,
        rate: f64,
        amount: f64,
    ) -> Result<OrderId, ExchangeError> {
        let currency_pair = codec::currency_pair(pair);
        let rate = format_amount(rate);
        let amount = format_amount(amount);
        let params = [
            ("command", command),
            ("currencyPair", currency_pair.as_str()),
            ("rate", rate.as_str()),
            ("amount", amount.as_str()),
        ];
        let response: PoloniexResponse<PoloniexOrderPlaced> = self
            .rest
            .post_form_json(TRADING_ENDPOINT, &params, true)
            .await?;
        Ok(response.into_result()?.order_number)
    }
}

#[async_trait]
impl<R: RestTransport> MarketDataSource for PoloniexConnector<R> {
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError> {
        Err(ExchangeError::unsupported(
            ExchangeKind::Poloniex,
            "get_markets",
        ))
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn get_ticker(&self, pair: &Pair) -> Result<Ticker, ExchangeError> {
        let params = [("command", "returnTicker")];
        let response: PoloniexResponse<HashMap<String, PoloniexTicker>> =
            self.rest.get_json(PUBLIC_ENDPOINT, &params, false).await?;

        let key = codec::currency_pair(pair);
        let tickers = response.into_result()?;
        let ticker = tickers.get(&key).ok_or_else(|| {
            ExchangeError::exchange(ExchangeKind::Poloniex, format!("no ticker for {key}"))
        })?;
        converters::convert_ticker(ticker)
    }

    fn get_pair_detail_url(&self, _pair: &Pair) -> Result<String, ExchangeError> {
        Err(ExchangeError::unsupported(
            ExchangeKind::Poloniex,
            "get_pair_detail_url",
        ))
    }
}

#[async_trait]
impl<R: RestTransport> OrderPlacer for PoloniexConnector<R> {
    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn buy(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError> {
        self.place_limit_order("buy", pair, rate, amount).await
    }

    #[instrument(skip(self), fields(exchange = "poloniex", pair = %pair))]
    async fn sell(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError> {
        self.place_limit_order("sell", pair, rate, amount).await
    }

    async fn cancel_order(&self, _order_id: &str) -> Result<(), ExchangeError> {
        Err(ExchangeError::unsupported(
            ExchangeKind::Poloniex,
            "cancel_order",
        ))
    }

    async fn get_open_orders(&self, _pair: &Pair) -> Result<Vec<OpenOrder>, ExchangeError> {
        Err(ExchangeError::unsupported(
            ExchangeKind::Poloniex,
            "get_open_orders",
        ))
    }
}

#[async_trait]
impl<R: RestTransport> AccountInfo for PoloniexConnector<R> {
    #[instrument(skip(self), fields(exchange = "poloniex", currency = currency))]
    async fn get_balance(&self, currency: &str) -> Result<f64, ExchangeError> {
        let params = [("command", "returnBalances")];
        let response: PoloniexResponse<HashMap<String, String>> = self
            .rest
            .post_form_json(TRADING_ENDPOINT, &params, true)
            .await?;

        // Currencies the account never touched are absent from the map.
        response
            .into_result()?
            .get(currency)
            .map_or(Ok(0.0), |raw| converters::parse_amount(raw))
    }
}

impl<R: RestTransport> ExchangeApi for PoloniexConnector<R> {
    fn kind(&self) -> ExchangeKind {
        ExchangeKind::Poloniex
    }
}
