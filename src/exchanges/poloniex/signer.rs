//! Poloniex trading API authentication.
//!
//! The nonce travels in the form body, the HMAC-SHA512 of the body goes
//! in the `Sign` header and the API key in `Key`. Public endpoints are
//! unsigned and never reach this code.

use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::{hmac_sha512_hex, RequestSigner, SignedRequest};

pub struct PoloniexSigner {
    api_key: String,
    api_secret: String,
}

impl PoloniexSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl RequestSigner for PoloniexSigner {
    fn sign(
        &self,
        _url: &str,
        _query: &str,
        body: &str,
        nonce: u64,
    ) -> Result<SignedRequest, ExchangeError> {
        let body = if body.is_empty() {
            format!("nonce={nonce}")
        } else {
            format!("{body}&nonce={nonce}")
        };
        let signature = hmac_sha512_hex(&self.api_secret, &body)?;

        Ok(SignedRequest {
            query: String::new(),
            body: Some(body),
            headers: vec![("Key", self.api_key.clone()), ("Sign", signature)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_is_appended_to_the_form_body() {
        let signer = PoloniexSigner::new("key", "secret");

        let signed = signer
            .sign("https://poloniex.com/tradingApi", "", "command=returnBalances", 1_500_000_000_000)
            .unwrap();

        assert_eq!(
            signed.body.as_deref(),
            Some("command=returnBalances&nonce=1500000000000")
        );
        assert!(signed.query.is_empty());
    }

    #[test]
    fn key_and_sign_headers_carry_the_credentials() {
        let signer = PoloniexSigner::new("key", "secret");

        let signed = signer
            .sign("https://poloniex.com/tradingApi", "", "command=returnBalances", 1)
            .unwrap();

        let headers: std::collections::HashMap<_, _> = signed.headers.into_iter().collect();
        assert_eq!(headers["Key"], "key");
        assert_eq!(headers["Sign"].len(), 128);
        assert!(headers["Sign"].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_changes_with_the_nonce() {
        let signer = PoloniexSigner::new("key", "secret");

        let first = signer.sign("u", "", "command=buy", 1).unwrap();
        let second = signer.sign("u", "", "command=buy", 2).unwrap();
        assert_ne!(first.headers[1].1, second.headers[1].1);
    }
}
