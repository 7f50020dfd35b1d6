use super::connector::PoloniexConnector;
use super::signer::PoloniexSigner;
use crate::core::config::ExchangeSettings;
use crate::core::errors::ExchangeError;
use crate::core::kernel::rest::{HttpTransport, HttpTransportBuilder, TransportConfig};
use crate::core::types::ExchangeKind;
use secrecy::ExposeSecret;
use std::sync::Arc;

pub const BASE_URL: &str = "https://poloniex.com";

/// Wire a live connector from validated settings.
pub fn build_connector(
    settings: &ExchangeSettings,
) -> Result<PoloniexConnector<HttpTransport>, ExchangeError> {
    let signer = Arc::new(PoloniexSigner::new(
        settings.key.expose_secret().as_str(),
        settings.secret.expose_secret().as_str(),
    ));
    let transport =
        HttpTransportBuilder::new(TransportConfig::new(BASE_URL, ExchangeKind::Poloniex))
            .with_signer(signer)
            .build()?;
    Ok(PoloniexConnector::new(transport))
}
