//! Canned transport and response builders shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use coinbridge::core::kernel::RestTransport;
use coinbridge::{BittrexConnector, ExchangeApi, ExchangeError, ExchangeWrapper, Pair};

/// In-memory transport serving canned JSON and recording every call.
///
/// Routes are the endpoint path, or `endpoint?command=...` for the
/// command-multiplexed Poloniex endpoints. Clones share the call log,
/// so tests can keep a handle after moving a clone into a connector.
#[derive(Clone, Default)]
pub struct StubTransport {
    responses: HashMap<String, Value>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(mut self, route: &str, response: Value) -> Self {
        self.responses.insert(route.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn serve(&self, endpoint: &str, params: &[(&str, &str)]) -> Value {
        let route = route(endpoint, params);
        self.calls.lock().unwrap().push(route.clone());
        self.responses
            .get(&route)
            .cloned()
            .unwrap_or_else(|| panic!("no stub response for {route}"))
    }
}

fn route(endpoint: &str, params: &[(&str, &str)]) -> String {
    params.iter().find(|(k, _)| *k == "command").map_or_else(
        || endpoint.to_string(),
        |(_, command)| format!("{endpoint}?command={command}"),
    )
}

#[async_trait]
impl RestTransport for StubTransport {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        _authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        Ok(self.serve(endpoint, params))
    }

    async fn post_form(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        _authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        Ok(self.serve(endpoint, params))
    }
}

/// Bittrex v1.1 success envelope around `result`.
pub fn bittrex_success(result: Value) -> Value {
    json!({ "success": true, "message": "", "result": result })
}

/// Bittrex v1.1 failure envelope.
pub fn bittrex_failure(message: &str) -> Value {
    json!({ "success": false, "message": message, "result": null })
}

/// `getmarkets` payload listing the given native market names.
pub fn markets_response(markets: &[&str]) -> Value {
    bittrex_success(Value::Array(
        markets
            .iter()
            .map(|name| json!({ "MarketName": name }))
            .collect(),
    ))
}

pub fn pairs(raw: &[&str]) -> Vec<Pair> {
    raw.iter().map(|p| p.parse().unwrap()).collect()
}

/// Wrapper over a Bittrex connector running against the stub.
pub async fn bittrex_wrapper(
    stub: &StubTransport,
    whitelist: &[&str],
    dry_run: bool,
) -> Result<ExchangeWrapper, ExchangeError> {
    let api: Arc<dyn ExchangeApi> = Arc::new(BittrexConnector::new(stub.clone()));
    ExchangeWrapper::with_api(api, &pairs(whitelist), dry_run).await
}
