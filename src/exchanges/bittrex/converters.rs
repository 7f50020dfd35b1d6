use super::types::{BittrexOpenOrder, BittrexTicker};
use crate::core::errors::ExchangeError;
use crate::core::types::{ExchangeKind, OpenOrder, Ticker};
use chrono::{DateTime, NaiveDateTime, Utc};

pub fn convert_ticker(ticker: BittrexTicker) -> Ticker {
    Ticker {
        bid: ticker.bid,
        ask: ticker.ask,
        last: ticker.last,
    }
}

/// Map one native open-order entry to the canonical shape.
///
/// `PricePerUnit` is null until the order fills; that normalizes to `0.0`,
/// the same rule applied to absent balances.
pub fn convert_open_order(order: BittrexOpenOrder) -> Result<OpenOrder, ExchangeError> {
    Ok(OpenOrder {
        id: order.order_uuid,
        order_type: order.order_type,
        opened: parse_opened(&order.opened)?,
        rate: order.price_per_unit.unwrap_or_default(),
        amount: order.quantity,
        remaining: order.quantity_remaining,
    })
}

/// Bittrex timestamps are naive ISO-8601 in UTC, e.g. `2014-07-09T03:55:48.77`.
fn parse_opened(raw: &str) -> Result<DateTime<Utc>, ExchangeError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            ExchangeError::exchange(ExchangeKind::Bittrex, format!("bad timestamp {raw:?}: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn open_order(price_per_unit: Option<f64>) -> BittrexOpenOrder {
        BittrexOpenOrder {
            order_uuid: "uuid-1".to_string(),
            exchange: "BTC-ETH".to_string(),
            order_type: "LIMIT_BUY".to_string(),
            quantity: 10.0,
            quantity_remaining: 4.5,
            limit: Some(0.05),
            price_per_unit,
            opened: "2017-09-12T18:29:35.09".to_string(),
        }
    }

    #[test]
    fn open_order_fields_map_to_canonical_names() {
        let order = convert_open_order(open_order(Some(0.049))).unwrap();
        assert_eq!(order.id, "uuid-1");
        assert_eq!(order.order_type, "LIMIT_BUY");
        assert_eq!(order.rate, 0.049);
        assert_eq!(order.amount, 10.0);
        assert_eq!(order.remaining, 4.5);
        assert_eq!(order.opened.hour(), 18);
    }

    #[test]
    fn unfilled_order_rate_defaults_to_zero() {
        let order = convert_open_order(open_order(None)).unwrap();
        assert_eq!(order.rate, 0.0);
    }

    #[test]
    fn timestamps_parse_with_and_without_fraction() {
        assert!(parse_opened("2014-07-09T03:55:48.77").is_ok());
        assert!(parse_opened("2014-07-09T03:55:48").is_ok());
        assert!(parse_opened("not-a-date").is_err());
    }
}
