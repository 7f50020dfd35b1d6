use crate::core::types::ExchangeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Rejected configuration: no exchange enabled, or a whitelisted pair
    /// the exchange does not trade. Only raised at construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The exchange's API reported failure on a well-formed request.
    #[error("{exchange}: {message}")]
    Exchange {
        exchange: ExchangeKind,
        message: String,
    },

    /// The selected exchange's integration does not implement this
    /// operation.
    #[error("{exchange} does not support {operation}")]
    UnsupportedOperation {
        exchange: ExchangeKind,
        operation: &'static str,
    },

    #[error("invalid pair: {0}")]
    InvalidPair(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExchangeError {
    pub fn exchange(exchange: ExchangeKind, message: impl Into<String>) -> Self {
        Self::Exchange {
            exchange,
            message: message.into(),
        }
    }

    pub fn unsupported(exchange: ExchangeKind, operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            exchange,
            operation,
        }
    }
}
