use crate::core::errors::ExchangeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported exchange backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeKind {
    Poloniex,
    Bittrex,
}

impl ExchangeKind {
    /// Fixed order used when scanning the configuration for the enabled
    /// exchange. The first enabled entry in this order wins.
    pub const PRIORITY: [Self; 2] = [Self::Poloniex, Self::Bittrex];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poloniex => "poloniex",
            Self::Bittrex => "bittrex",
        }
    }
}

impl fmt::Display for ExchangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical currency pair, rendered `BASE_QUOTE` with uppercase codes.
///
/// This form is stable across the whole system; translation to an
/// exchange's native syntax happens only in the per-exchange codec
/// modules, never in business logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    base: String,
    quote: String,
}

impl Pair {
    pub fn new(base: &str, quote: &str) -> Result<Self, ExchangeError> {
        if !is_currency_code(base) || !is_currency_code(quote) {
            return Err(ExchangeError::InvalidPair(format!("{base}_{quote}")));
        }
        Ok(Self {
            base: base.to_string(),
            quote: quote.to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }
}

/// Currency codes are uppercase alphanumerics, e.g. `BTC`, `USDT`, `1CR`.
fn is_currency_code(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.base, self.quote)
    }
}

impl FromStr for Pair {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('_')
            .ok_or_else(|| ExchangeError::InvalidPair(s.to_string()))?;
        if quote.contains('_') {
            return Err(ExchangeError::InvalidPair(s.to_string()));
        }
        Self::new(base, quote)
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Opaque order handle as issued by the exchange.
pub type OrderId = String;

/// Bid/ask/last snapshot for one pair.
///
/// Values are passed through from the exchange unsanitized, so `bid <= ask`
/// is not guaranteed at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
}

/// One open order, normalized from the exchange's native field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub id: OrderId,
    pub order_type: String,
    pub opened: DateTime<Utc>,
    pub rate: f64,
    pub amount: f64,
    pub remaining: f64,
}
