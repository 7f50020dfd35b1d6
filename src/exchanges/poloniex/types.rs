//! Poloniex wire formats.
//!
//! Poloniex has no success flag. Successful calls return the payload
//! directly; failures return `{"error": "..."}` with HTTP 200, so the
//! envelope is an untagged enum probed failure-first.

use serde::Deserialize;

use crate::core::errors::ExchangeError;
use crate::core::types::ExchangeKind;

/// Response envelope shared by the public and trading APIs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PoloniexResponse<T> {
    Failure { error: String },
    Success(T),
}

impl<T> PoloniexResponse<T> {
    /// Unwraps the payload, mapping an error response to [`ExchangeError`].
    pub fn into_result(self) -> Result<T, ExchangeError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure { error } => Err(ExchangeError::exchange(ExchangeKind::Poloniex, error)),
        }
    }
}

/// One entry of the `returnTicker` map. All amounts arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexTicker {
    pub last: String,
    #[serde(rename = "lowestAsk")]
    pub lowest_ask: String,
    #[serde(rename = "highestBid")]
    pub highest_bid: String,
}

/// Result of a `buy` or `sell` command.
#[derive(Debug, Clone, Deserialize)]
pub struct PoloniexOrderPlaced {
    #[serde(rename = "orderNumber")]
    pub order_number: String,
}
