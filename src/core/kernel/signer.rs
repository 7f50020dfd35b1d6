use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use sha2::Sha512;

/// Signed replacement parts for one request.
///
/// `query` and `body` come back exactly as signed, so the transport must
/// send them verbatim; a signature over a reordered query would not verify.
#[derive(Debug, Default)]
pub struct SignedRequest {
    /// Complete query string, without the leading `?`. Empty when unused.
    pub query: String,
    /// Complete form body. `None` when authentication rides in the query.
    pub body: Option<String>,
    pub headers: Vec<(&'static str, String)>,
}

/// Signer trait for request authentication
///
/// Implementations receive the request exactly as the transport would send
/// it unauthenticated and return the signed replacement parts. The nonce is
/// supplied by the transport so signers stay deterministic and testable.
pub trait RequestSigner: Send + Sync {
    /// Sign a request
    ///
    /// # Arguments
    /// * `url` - Full request URL, without query string
    /// * `query` - Query string (without leading '?'), possibly empty
    /// * `body` - Form-encoded body, possibly empty
    /// * `nonce` - Strictly increasing request nonce
    fn sign(
        &self,
        url: &str,
        query: &str,
        body: &str,
        nonce: u64,
    ) -> Result<SignedRequest, ExchangeError>;
}

/// Shared HMAC-SHA512 primitive used by the exchange signers.
pub fn hmac_sha512_hex(secret: &str, payload: &str) -> Result<String, ExchangeError> {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes())
        .map_err(|e| ExchangeError::Auth(format!("invalid secret key: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_sha512_is_deterministic() {
        let a = hmac_sha512_hex("secret", "payload").unwrap();
        let b = hmac_sha512_hex("secret", "payload").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hmac_sha512_varies_with_key_and_payload() {
        let base = hmac_sha512_hex("secret", "payload").unwrap();
        assert_ne!(hmac_sha512_hex("other", "payload").unwrap(), base);
        assert_ne!(hmac_sha512_hex("secret", "other").unwrap(), base);
    }
}
