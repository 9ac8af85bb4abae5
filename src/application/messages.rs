use crate::domain::errors::AppError;
use crate::domain::market_data::{Price, Sample, Signal, Strategy};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tick pushed by the signal server.
///
/// Only `price` is required. A missing `signal` reads as `Hold`; the SMA
/// backend streams `{price, sma_fast, sma_slow}` without one. `timestamp` is
/// accepted but the client stamps samples at receipt instead. Any other field
/// is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InboundTick {
    pub price: f64,
    #[serde(default)]
    pub signal: Signal,
    #[serde(default)]
    pub sma_fast: Option<f64>,
    #[serde(default)]
    pub sma_slow: Option<f64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

impl InboundTick {
    /// Decode one message. Only a JSON object is a tick: the derived
    /// deserializer would otherwise take `[100, "buy"]` by field position.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let object: Map<String, Value> = serde_json::from_str(raw)
            .map_err(|e| AppError::MalformedMessage(format!("Expected a JSON object: {e}")))?;
        serde_json::from_value(Value::Object(object))
            .map_err(|e| AppError::MalformedMessage(format!("Failed to parse tick: {e}")))
    }

    /// Convert into a domain sample stamped with the given receipt time
    pub fn into_sample(self, received_at: String) -> Sample {
        Sample::new(received_at, Price::from(self.price), self.signal)
            .with_averages(self.sma_fast.map(Price::from), self.sma_slow.map(Price::from))
            .with_symbol(self.symbol)
    }
}

/// Control message sent when the user picks a strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyCommand<'a> {
    pub strategy: &'a str,
}

impl<'a> StrategyCommand<'a> {
    pub fn new(strategy: &'a Strategy) -> Self {
        Self { strategy: strategy.value() }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::ValidationError(format!("Failed to encode strategy: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_tick() {
        let tick = InboundTick::from_json(r#"{"price":101.5,"signal":"sell"}"#).unwrap();
        assert_eq!(tick.price, 101.5);
        assert_eq!(tick.signal, Signal::Sell);
        assert!(tick.sma_fast.is_none());
    }

    #[test]
    fn parses_tick_with_backend_extras() {
        let raw = r#"{"price":150.2,"signal":"buy","sma_fast":149.9,"sma_slow":null,"symbol":"AAPL","timestamp":1717000000.5}"#;
        let tick = InboundTick::from_json(raw).unwrap();
        assert_eq!(tick.sma_fast, Some(149.9));
        assert_eq!(tick.sma_slow, None);
        assert_eq!(tick.symbol.as_deref(), Some("AAPL"));

        let sample = tick.into_sample("12:00:00".to_string());
        assert_eq!(sample.timestamp, "12:00:00");
        assert_eq!(sample.sma_fast, Some(Price::from(149.9)));
    }

    #[test]
    fn tick_without_signal_holds() {
        let tick = InboundTick::from_json(r#"{"price":150.12,"sma_fast":null,"sma_slow":149.8}"#).unwrap();
        assert_eq!(tick.signal, Signal::Hold);
        assert_eq!(tick.sma_slow, Some(149.8));
    }

    #[test]
    fn non_objects_and_missing_price_are_malformed() {
        for raw in [
            r#"{"signal":"buy"}"#,
            r#"{"price":"1","signal":"buy"}"#,
            r#"[100,"buy"]"#,
            "[100]",
            "100",
            "null",
            "not json",
        ] {
            assert!(matches!(InboundTick::from_json(raw), Err(AppError::MalformedMessage(_))), "{raw}");
        }
    }
}
