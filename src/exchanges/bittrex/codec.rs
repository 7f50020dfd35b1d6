//! Pair translation between canonical `BASE_QUOTE` and Bittrex market
//! names, which use a dash (`BTC-ETH`).

use crate::core::errors::ExchangeError;
use crate::core::types::Pair;

/// `BTC_ETH` -> `BTC-ETH`
pub fn market_name(pair: &Pair) -> String {
    format!("{}-{}", pair.base(), pair.quote())
}

/// `BTC-ETH` -> `BTC_ETH`
pub fn parse_market_name(name: &str) -> Result<Pair, ExchangeError> {
    let (base, quote) = name
        .split_once('-')
        .ok_or_else(|| ExchangeError::InvalidPair(name.to_string()))?;
    Pair::new(base, quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_market_name_with_dash() {
        let pair: Pair = "BTC_ETH".parse().unwrap();
        assert_eq!(market_name(&pair), "BTC-ETH");
    }

    #[test]
    fn translation_round_trips() {
        for name in ["BTC-ETH", "BTC-LTC", "USDT-BTC", "ETH-1ST"] {
            let pair = parse_market_name(name).unwrap();
            assert_eq!(market_name(&pair), name);
        }
        for canonical in ["BTC_ETH", "ETH_XMR"] {
            let pair: Pair = canonical.parse().unwrap();
            assert_eq!(
                parse_market_name(&market_name(&pair)).unwrap().to_string(),
                canonical
            );
        }
    }

    #[test]
    fn rejects_malformed_market_names() {
        assert!(parse_market_name("BTCETH").is_err());
        assert!(parse_market_name("btc-eth").is_err());
        assert!(parse_market_name("-ETH").is_err());
    }
}
