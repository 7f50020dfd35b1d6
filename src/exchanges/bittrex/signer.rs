use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::{hmac_sha512_hex, RequestSigner, SignedRequest};

/// Bittrex v1.1 API-key authentication.
///
/// `apikey` and `nonce` ride in the query string; the complete request URI
/// is signed with HMAC-SHA512 into the `apisign` header.
pub struct BittrexSigner {
    api_key: String,
    api_secret: String,
}

impl BittrexSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl RequestSigner for BittrexSigner {
    fn sign(
        &self,
        url: &str,
        query: &str,
        _body: &str,
        nonce: u64,
    ) -> Result<SignedRequest, ExchangeError> {
        let query = if query.is_empty() {
            format!("apikey={}&nonce={nonce}", self.api_key)
        } else {
            format!("{query}&apikey={}&nonce={nonce}", self.api_key)
        };
        let uri = format!("{url}?{query}");
        let signature = hmac_sha512_hex(&self.api_secret, &uri)?;

        Ok(SignedRequest {
            query,
            body: None,
            headers: vec![("apisign", signature)],
        })
    }
}
