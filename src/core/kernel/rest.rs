use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::RequestSigner;
use crate::core::types::ExchangeKind;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

/// Transport trait under the exchange connectors
///
/// Connectors stay generic over this trait, so tests can substitute canned
/// responses for the wire. Implementations handle authentication through
/// the configured signer; connectors only mark which calls need it.
#[async_trait]
pub trait RestTransport: Send + Sync {
    /// Make a GET request
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `params` - Query parameters as key-value pairs
    /// * `authenticated` - Whether to sign the request
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make a POST request with a form-encoded body
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `params` - Form fields as key-value pairs
    /// * `authenticated` - Whether to sign the request
    async fn post_form(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError>;

    /// Make a GET request with strongly-typed response
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        let value = self.get(endpoint, params, authenticated).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a form POST request with strongly-typed response
    async fn post_form_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        let value = self.post_form(endpoint, params, authenticated).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Configuration for the HTTP transport
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange the transport talks to, for tracing and error context
    pub exchange: ExchangeKind,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>, exchange: ExchangeKind) -> Self {
        Self {
            base_url: base_url.into(),
            exchange,
            timeout: Duration::from_secs(30),
            user_agent: concat!("coinbridge/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Builder for the reqwest-backed transport
pub struct HttpTransportBuilder {
    config: TransportConfig,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl HttpTransportBuilder {
    pub fn new(config: TransportConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn build(self) -> Result<HttpTransport, ExchangeError> {
        let client = Client::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .build()?;

        Ok(HttpTransport {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Implementation of [`RestTransport`] using reqwest
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: TransportConfig,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    fn signer(&self) -> Result<&Arc<dyn RequestSigner>, ExchangeError> {
        self.signer.as_ref().ok_or_else(|| {
            ExchangeError::Auth("no credentials configured for authenticated request".to_string())
        })
    }

    /// Current timestamp in milliseconds, doubling as the request nonce.
    fn nonce() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }

    fn create_query_string(params: &[(&str, &str)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[instrument(skip(self, response), fields(exchange = %self.config.exchange, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Value, ExchangeError> {
        let status = response.status();
        let text = response.text().await?;
        trace!("response body: {}", text);

        if status.is_success() {
            Ok(serde_json::from_str(&text)?)
        } else {
            Err(ExchangeError::Exchange {
                exchange: self.config.exchange,
                message: format!("HTTP {status}: {text}"),
            })
        }
    }
}

#[async_trait]
impl RestTransport for HttpTransport {
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange, endpoint = %endpoint))]
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let url = self.build_url(endpoint);

        let request = if authenticated {
            let query = Self::create_query_string(params);
            let signed = self.signer()?.sign(&url, &query, "", Self::nonce())?;
            let full_url = if signed.query.is_empty() {
                url
            } else {
                format!("{url}?{}", signed.query)
            };
            let mut request = self.client.get(full_url);
            for (name, value) in signed.headers {
                request = request.header(name, value);
            }
            request
        } else if params.is_empty() {
            self.client.get(url)
        } else {
            self.client.get(url).query(params)
        };

        trace!("sending GET request");
        let response = request.send().await?;
        self.handle_response(response).await
    }

    #[instrument(skip(self, params), fields(exchange = %self.config.exchange, endpoint = %endpoint))]
    async fn post_form(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let url = self.build_url(endpoint);

        let request = if authenticated {
            let body = Self::create_query_string(params);
            let signed = self.signer()?.sign(&url, "", &body, Self::nonce())?;
            let mut request = self
                .client
                .post(url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(signed.body.unwrap_or(body));
            for (name, value) in signed.headers {
                request = request.header(name, value);
            }
            request
        } else {
            self.client.post(url).form(params)
        };

        trace!("sending POST request");
        let response = request.send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_joins_pairs() {
        let params = [("market", "BTC-ETH"), ("rate", "0.05")];
        assert_eq!(
            HttpTransport::create_query_string(&params),
            "market=BTC-ETH&rate=0.05"
        );
        assert_eq!(HttpTransport::create_query_string(&[]), "");
    }

    #[test]
    fn config_defaults() {
        let config = TransportConfig::new("https://example.com", ExchangeKind::Bittrex);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("coinbridge/"));
    }

    #[tokio::test]
    async fn authenticated_call_without_signer_fails_before_sending() {
        // unroutable base URL: the signer check must fire first
        let transport =
            HttpTransportBuilder::new(TransportConfig::new("http://127.0.0.1:0", ExchangeKind::Bittrex))
                .build()
                .unwrap();

        let err = transport.get("/market/cancel", &[], true).await.unwrap_err();
        assert!(matches!(err, ExchangeError::Auth(_)));

        let err = transport.post_form("/tradingApi", &[], true).await.unwrap_err();
        assert!(matches!(err, ExchangeError::Auth(_)));
    }
}
