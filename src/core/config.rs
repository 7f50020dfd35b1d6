use crate::core::errors::ExchangeError;
use crate::core::types::{ExchangeKind, Pair};
use secrecy::Secret;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;

/// Per-exchange section of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeSettings {
    pub enabled: bool,
    pub key: Secret<String>,
    pub secret: Secret<String>,
    #[serde(default)]
    pub pair_whitelist: Vec<Pair>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for ExchangeSettings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeSettings", 4)?;
        state.serialize_field("enabled", &self.enabled)?;
        state.serialize_field("key", "[REDACTED]")?;
        state.serialize_field("secret", "[REDACTED]")?;
        state.serialize_field("pair_whitelist", &self.pair_whitelist)?;
        state.end()
    }
}

impl ExchangeSettings {
    /// Create enabled settings with API credentials
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            enabled: true,
            key: Secret::new(key.into()),
            secret: Secret::new(secret.into()),
            pair_whitelist: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_whitelist(mut self, pairs: Vec<Pair>) -> Self {
        self.pair_whitelist = pairs;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Top-level configuration consumed by the wrapper.
///
/// Exactly one exchange section is expected to be enabled; enforcement
/// happens once, in [`enabled_exchange`](Self::enabled_exchange), not on
/// every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WrapperConfig {
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub poloniex: Option<ExchangeSettings>,
    #[serde(default)]
    pub bittrex: Option<ExchangeSettings>,
}

impl WrapperConfig {
    /// Load a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExchangeError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ExchangeError::Configuration(format!(
                "cannot read {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    #[must_use]
    pub fn with_poloniex(mut self, settings: ExchangeSettings) -> Self {
        self.poloniex = Some(settings);
        self
    }

    #[must_use]
    pub fn with_bittrex(mut self, settings: ExchangeSettings) -> Self {
        self.bittrex = Some(settings);
        self
    }

    fn section(&self, kind: ExchangeKind) -> Option<&ExchangeSettings> {
        match kind {
            ExchangeKind::Poloniex => self.poloniex.as_ref(),
            ExchangeKind::Bittrex => self.bittrex.as_ref(),
        }
    }

    /// Pick the single enabled exchange, scanning in the fixed
    /// [`ExchangeKind::PRIORITY`] order.
    pub fn enabled_exchange(&self) -> Result<(ExchangeKind, &ExchangeSettings), ExchangeError> {
        for kind in ExchangeKind::PRIORITY {
            if let Some(settings) = self.section(kind) {
                if settings.enabled {
                    return Ok((kind, settings));
                }
            }
        }
        Err(ExchangeError::Configuration(
            "no exchange specified".to_string(),
        ))
    }
}
