use super::connector::BittrexConnector;
use super::signer::BittrexSigner;
use crate::core::config::ExchangeSettings;
use crate::core::errors::ExchangeError;
use crate::core::kernel::rest::{HttpTransport, HttpTransportBuilder, TransportConfig};
use crate::core::types::ExchangeKind;
use secrecy::ExposeSecret;
use std::sync::Arc;

pub const BASE_URL: &str = "https://bittrex.com/api/v1.1";

/// Wire a live connector from validated settings.
pub fn build_connector(
    settings: &ExchangeSettings,
) -> Result<BittrexConnector<HttpTransport>, ExchangeError> {
    let signer = Arc::new(BittrexSigner::new(
        settings.key.expose_secret().as_str(),
        settings.secret.expose_secret().as_str(),
    ));
    let transport = HttpTransportBuilder::new(TransportConfig::new(BASE_URL, ExchangeKind::Bittrex))
        .with_signer(signer)
        .build()?;
    Ok(BittrexConnector::new(transport))
}
