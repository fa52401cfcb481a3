use serde::{Deserialize, Serialize};

use crate::analysis::RiskMetrics;

/// Derived outcome of one purchase plan valued at the series' final close.
/// Computed once, immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub total_invested: f64,
    pub total_units: f64,
    pub final_value: f64,
    pub profit: f64,
    pub trade_count: usize,
}

impl ScenarioSummary {
    pub fn empty() -> Self {
        ScenarioSummary {
            total_invested: 0.0,
            total_units: 0.0,
            final_value: 0.0,
            profit: 0.0,
            trade_count: 0,
        }
    }
}

/// Blind baseline outcome for one cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlindScenario {
    pub cadence_days: u32,
    pub summary: ScenarioSummary,
}

/// Side-by-side result of the optimized schedule and the blind baselines
/// for one asset, with the series' risk diagnostics attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub label: String,
    pub optimized: ScenarioSummary,
    pub blind: Vec<BlindScenario>,
    pub risk: RiskMetrics,
}
