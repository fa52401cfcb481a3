use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Smallest price ever used as a divisor. A period with a non-positive open
/// is clamped to this before converting spend into units, which avoids a
/// division by zero without ever treating the purchase as free.
pub const MIN_POSITIVE_PRICE: f64 = 1e-9;

/// One OHLC observation of the backtest window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePeriod {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePeriod {
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        PricePeriod {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }

    /// Open price guarded for use as a divisor.
    pub fn effective_open(&self) -> f64 {
        if self.open <= 0.0 {
            MIN_POSITIVE_PRICE
        } else {
            self.open
        }
    }
}
