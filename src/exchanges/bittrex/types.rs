use crate::core::errors::ExchangeError;
use crate::core::types::ExchangeKind;
use serde::Deserialize;

/// Standard Bittrex v1.1 response envelope.
///
/// Every endpoint wraps its payload in `success`/`message`/`result`;
/// failures arrive as HTTP 200 with `success == false`.
#[derive(Debug, Clone, Deserialize)]
pub struct BittrexResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

impl<T> BittrexResponse<T> {
    /// Unwrap the payload, converting a reported failure into an error
    /// carrying the exchange's own message.
    pub fn into_result(self) -> Result<T, ExchangeError> {
        if !self.success {
            return Err(ExchangeError::exchange(ExchangeKind::Bittrex, self.message));
        }
        self.result.ok_or_else(|| {
            ExchangeError::exchange(ExchangeKind::Bittrex, "missing result payload")
        })
    }

    /// Check the envelope for operations whose success carries no payload,
    /// such as cancel.
    pub fn ensure_success(self) -> Result<(), ExchangeError> {
        if self.success {
            Ok(())
        } else {
            Err(ExchangeError::exchange(ExchangeKind::Bittrex, self.message))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BittrexMarket {
    #[serde(rename = "MarketName")]
    pub market_name: String,
    #[serde(rename = "BaseCurrency", default)]
    pub base_currency: String,
    #[serde(rename = "MarketCurrency", default)]
    pub market_currency: String,
    #[serde(rename = "IsActive", default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BittrexTicker {
    #[serde(rename = "Bid")]
    pub bid: f64,
    #[serde(rename = "Ask")]
    pub ask: f64,
    #[serde(rename = "Last")]
    pub last: f64,
}

/// Payload of `buylimit`/`selllimit`. The field is lowercase in this API,
/// unlike everything else.
#[derive(Debug, Clone, Deserialize)]
pub struct BittrexOrderPlaced {
    pub uuid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BittrexBalance {
    #[serde(rename = "Currency", default)]
    pub currency: String,
    /// Null for currencies the account never held.
    #[serde(rename = "Balance")]
    pub balance: Option<f64>,
    #[serde(rename = "Available", default)]
    pub available: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BittrexOpenOrder {
    #[serde(rename = "OrderUuid")]
    pub order_uuid: String,
    #[serde(rename = "Exchange", default)]
    pub exchange: String,
    #[serde(rename = "OrderType")]
    pub order_type: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "QuantityRemaining")]
    pub quantity_remaining: f64,
    #[serde(rename = "Limit", default)]
    pub limit: Option<f64>,
    /// Average fill price; null while the order is unfilled.
    #[serde(rename = "PricePerUnit")]
    pub price_per_unit: Option<f64>,
    #[serde(rename = "Opened")]
    pub opened: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successful_envelope_unwraps_payload() {
        let raw = json!({"success": true, "message": "", "result": {"uuid": "abc-123"}});
        let response: BittrexResponse<BittrexOrderPlaced> = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_result().unwrap().uuid, "abc-123");
    }

    #[test]
    fn failed_envelope_carries_exchange_message() {
        let raw = json!({"success": false, "message": "INSUFFICIENT_FUNDS", "result": null});
        let response: BittrexResponse<BittrexOrderPlaced> = serde_json::from_value(raw).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("bittrex"));
        assert!(err.to_string().contains("INSUFFICIENT_FUNDS"));
    }

    #[test]
    fn null_result_on_success_is_fine_for_cancel() {
        let raw = json!({"success": true, "message": "", "result": null});
        let response: BittrexResponse<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert!(response.ensure_success().is_ok());
    }

    #[test]
    fn market_entry_needs_only_its_name() {
        let raw = json!({"MarketName": "BTC-ETH"});
        let market: BittrexMarket = serde_json::from_value(raw).unwrap();
        assert_eq!(market.market_name, "BTC-ETH");
        assert!(!market.is_active);
    }

    #[test]
    fn open_order_deserializes_native_fields() {
        let raw = json!({
            "Uuid": null,
            "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
            "Exchange": "BTC-LTC",
            "OrderType": "LIMIT_SELL",
            "Quantity": 5.0,
            "QuantityRemaining": 5.0,
            "Limit": 2.0,
            "CommissionPaid": 0.0,
            "Price": 0.0,
            "PricePerUnit": null,
            "Opened": "2014-07-09T03:55:48.77",
        });
        let order: BittrexOpenOrder = serde_json::from_value(raw).unwrap();
        assert_eq!(order.order_uuid, "09aa5bb6-8232-41aa-9b78-a5a1093e0211");
        assert_eq!(order.order_type, "LIMIT_SELL");
        assert!(order.price_per_unit.is_none());
    }
}
