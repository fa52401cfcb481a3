use serde::{Deserialize, Serialize};

use crate::domain::PricePeriod;
use crate::error::{Result, StrategyError};

/// Ordered per-period OHLC observations for one asset over one backtest
/// window. Construction validates strict timestamp ordering (which also
/// rules out duplicates); after that the series is read-only to every core
/// component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    periods: Vec<PricePeriod>,
}

impl PriceSeries {
    pub fn new(periods: Vec<PricePeriod>) -> Result<Self> {
        for pair in periods.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(StrategyError::UnorderedSeries(format!(
                    "{} does not advance past {}",
                    pair[1].timestamp, pair[0].timestamp
                )));
            }
        }
        Ok(PriceSeries { periods })
    }

    pub fn periods(&self) -> &[PricePeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn first(&self) -> Option<&PricePeriod> {
        self.periods.first()
    }

    pub fn last(&self) -> Option<&PricePeriod> {
        self.periods.last()
    }

    /// Per-period simple returns. The return is undefined for the first
    /// period, so the result holds `len() - 1` entries.
    pub fn returns(&self) -> Vec<f64> {
        self.periods
            .windows(2)
            .map(|pair| pair[1].close / pair[0].close - 1.0)
            .collect()
    }

    /// Closing price of the last period, used to value every plan.
    pub fn final_close(&self) -> Option<f64> {
        self.last().map(|p| p.close)
    }
}
