//! Poloniex's native pair syntax is the canonical underscore form itself,
//! so translation is the identity. It still goes through here: business
//! logic never formats native pair strings on its own.

use crate::core::errors::ExchangeError;
use crate::core::types::Pair;

/// `BTC_ETH` -> `BTC_ETH`
pub fn currency_pair(pair: &Pair) -> String {
    pair.to_string()
}

/// `BTC_ETH` -> `BTC_ETH`, validating the canonical format
pub fn parse_currency_pair(raw: &str) -> Result<Pair, ExchangeError> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_the_identity() {
        for canonical in ["BTC_ETH", "USDT_BTC", "BTC_1CR"] {
            let pair = parse_currency_pair(canonical).unwrap();
            assert_eq!(currency_pair(&pair), canonical);
        }
    }

    #[test]
    fn still_validates_format() {
        assert!(parse_currency_pair("BTC-ETH").is_err());
        assert!(parse_currency_pair("btc_eth").is_err());
    }
}
