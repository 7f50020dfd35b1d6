use super::codec;
use super::converters;
use super::types::{
    BittrexBalance, BittrexMarket, BittrexOpenOrder, BittrexOrderPlaced, BittrexResponse,
    BittrexTicker,
};
use crate::core::errors::ExchangeError;
use crate::core::kernel::rest::RestTransport;
use crate::core::traits::{AccountInfo, ExchangeApi, MarketDataSource, OrderPlacer};
use crate::core::types::{ExchangeKind, OpenOrder, OrderId, Pair, Ticker};
use crate::exchanges::format_amount;
use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

/// Bittrex v1.1 integration.
///
/// Generic over the transport so tests can run it against canned
/// responses.
pub struct BittrexConnector<R: RestTransport> {
    rest: R,
}

impl<R: RestTransport> BittrexConnector<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    async fn place_limit_order(
        &self,
        endpoint: &str,
        pair: &Pair,
        rate: f64,
        amount: f64,
    ) -> Result<OrderId, ExchangeError> {
        let market = codec::market_name(pair);
        let quantity = format_amount(amount);
        let rate = format_amount(rate);
        let params = [
            ("market", market.as_str()),
            ("quantity", quantity.as_str()),
            ("rate", rate.as_str()),
        ];
        let response: BittrexResponse<BittrexOrderPlaced> =
            self.rest.get_json(endpoint, &params, true).await?;
        Ok(response.into_result()?.uuid)
    }
}

#[async_trait]
impl<R: RestTransport> MarketDataSource for BittrexConnector<R> {
    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_markets(&self) -> Result<Vec<Pair>, ExchangeError> {
        let response: BittrexResponse<Vec<BittrexMarket>> =
            self.rest.get_json("/public/getmarkets", &[], false).await?;
        response
            .into_result()?
            .into_iter()
            .map(|market| codec::parse_market_name(&market.market_name))
            .collect()
    }

    #[instrument(skip(self), fields(exchange = "bittrex", pair = %pair))]
    async fn get_ticker(&self, pair: &Pair) -> Result<Ticker, ExchangeError> {
        let market = codec::market_name(pair);
        let params = [("market", market.as_str())];
        let response: BittrexResponse<BittrexTicker> =
            self.rest.get_json("/public/getticker", &params, false).await?;
        Ok(converters::convert_ticker(response.into_result()?))
    }

    fn get_pair_detail_url(&self, pair: &Pair) -> Result<String, ExchangeError> {
        Ok(format!(
            "https://bittrex.com/Market/Index?MarketName={}",
            codec::market_name(pair)
        ))
    }
}

#[async_trait]
impl<R: RestTransport> OrderPlacer for BittrexConnector<R> {
    #[instrument(skip(self), fields(exchange = "bittrex", pair = %pair))]
    async fn buy(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError> {
        self.place_limit_order("/market/buylimit", pair, rate, amount)
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex", pair = %pair))]
    async fn sell(&self, pair: &Pair, rate: f64, amount: f64) -> Result<OrderId, ExchangeError> {
        self.place_limit_order("/market/selllimit", pair, rate, amount)
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex", order_id = order_id))]
    async fn cancel_order(&self, order_id: &str) -> Result<(), ExchangeError> {
        let params = [("uuid", order_id)];
        let response: BittrexResponse<Value> =
            self.rest.get_json("/market/cancel", &params, true).await?;
        response.ensure_success()
    }

    #[instrument(skip(self), fields(exchange = "bittrex", pair = %pair))]
    async fn get_open_orders(&self, pair: &Pair) -> Result<Vec<OpenOrder>, ExchangeError> {
        let market = codec::market_name(pair);
        let params = [("market", market.as_str())];
        let response: BittrexResponse<Vec<BittrexOpenOrder>> = self
            .rest
            .get_json("/market/getopenorders", &params, true)
            .await?;
        response
            .into_result()?
            .into_iter()
            .map(converters::convert_open_order)
            .collect()
    }
}

#[async_trait]
impl<R: RestTransport> AccountInfo for BittrexConnector<R> {
    #[instrument(skip(self), fields(exchange = "bittrex", currency = currency))]
    async fn get_balance(&self, currency: &str) -> Result<f64, ExchangeError> {
        let params = [("currency", currency)];
        let response: BittrexResponse<BittrexBalance> = self
            .rest
            .get_json("/account/getbalance", &params, true)
            .await?;
        Ok(response.into_result()?.balance.unwrap_or_default())
    }
}

impl<R: RestTransport> ExchangeApi for BittrexConnector<R> {
    fn kind(&self) -> ExchangeKind {
        ExchangeKind::Bittrex
    }
}
