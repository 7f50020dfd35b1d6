//! Conversions from Poloniex wire formats to the shared model.

use crate::core::errors::ExchangeError;
use crate::core::types::{ExchangeKind, Ticker};

use super::types::PoloniexTicker;

pub fn convert_ticker(ticker: &PoloniexTicker) -> Result<Ticker, ExchangeError> {
    Ok(Ticker {
        bid: parse_amount(&ticker.highest_bid)?,
        ask: parse_amount(&ticker.lowest_ask)?,
        last: parse_amount(&ticker.last)?,
    })
}

/// Poloniex serializes every amount as a string.
pub fn parse_amount(raw: &str) -> Result<f64, ExchangeError> {
    raw.parse().map_err(|_| {
        ExchangeError::exchange(
            ExchangeKind::Poloniex,
            format!("non-numeric amount {raw:?}"),
        )
    })
}
