//! Risk diagnostics over a price series with returns.
//!
//! This module is diagnostic, not load-bearing: a series that cannot be
//! scored (too short, non-finite returns) degrades to all-`None` metrics
//! instead of failing the scenario pipeline.

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::config::ENGINE;
use crate::error::{Result, StrategyError};
use crate::models::PriceSeries;

/// Declared bar cadence of the series, keying the annualization constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SamplingFrequency {
    /// 4-hour bars, 2190 per year
    #[value(name = "4h")]
    FourHour,
    /// Daily bars, 365 per year
    #[value(name = "1d")]
    Daily,
    /// Anything else: no annualization
    #[value(name = "other")]
    Other,
}

impl SamplingFrequency {
    /// `sqrt(periods_per_year)`, the multiplier applied to per-period
    /// return statistics. Unrecognized cadences use 1.0.
    pub fn annualization_factor(&self) -> f64 {
        match self {
            SamplingFrequency::FourHour => ENGINE.annualization.four_hour_periods_per_year.sqrt(),
            SamplingFrequency::Daily => ENGINE.annualization.daily_periods_per_year.sqrt(),
            SamplingFrequency::Other => 1.0,
        }
    }
}

/// Drawdown / volatility / risk-adjusted-return statistics. `None` means
/// the metric could not be computed for this series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub max_drawdown: Option<f64>,
    pub volatility: Option<f64>,
    pub sharpe_ratio: Option<f64>,
}

impl RiskMetrics {
    pub fn unavailable() -> Self {
        RiskMetrics::default()
    }

    pub fn is_available(&self) -> bool {
        self.max_drawdown.is_some() && self.volatility.is_some() && self.sharpe_ratio.is_some()
    }
}

/// Score a price series for risk. An empty series is the only hard failure;
/// everything else degrades to `RiskMetrics::unavailable()`.
pub fn evaluate(series: &PriceSeries, frequency: SamplingFrequency) -> Result<RiskMetrics> {
    if series.is_empty() {
        return Err(StrategyError::EmptySeries);
    }

    let returns = series.returns();
    match compute(&returns, frequency) {
        Some(metrics) => Ok(metrics),
        None => {
            warn!(
                "risk metrics unavailable for series of {} periods",
                series.len()
            );
            Ok(RiskMetrics::unavailable())
        }
    }
}

fn compute(returns: &[f64], frequency: SamplingFrequency) -> Option<RiskMetrics> {
    if returns.is_empty() || returns.iter().any(|r| !r.is_finite()) {
        return None;
    }

    // Cumulative product of (1 + r), its running maximum, and the drawdown
    // of the cumulative curve from that peak
    let mut cumulative = 1.0;
    let mut running_max = f64::MIN;
    let mut max_drawdown: f64 = 0.0;
    for r in returns {
        cumulative *= 1.0 + r;
        running_max = running_max.max(cumulative);
        let drawdown = cumulative / running_max - 1.0;
        max_drawdown = max_drawdown.min(drawdown);
    }

    let mean = Statistics::mean(returns);
    let stdev = Statistics::std_dev(returns);
    let factor = frequency.annualization_factor();

    let volatility = stdev * factor;
    let sharpe_ratio = (mean * factor) / (stdev + ENGINE.guards.sharpe_epsilon);

    if !max_drawdown.is_finite() || !volatility.is_finite() || !sharpe_ratio.is_finite() {
        return None;
    }

    Some(RiskMetrics {
        max_drawdown: Some(max_drawdown),
        volatility: Some(volatility),
        sharpe_ratio: Some(sharpe_ratio),
    })
}
