//! Engine and analytics configuration

use std::time::Duration;

/// Annualization constants keyed by bar sampling frequency
pub struct AnnualizationConfig {
    // 4-hour bars: 6 per day over a 365-day year
    pub four_hour_periods_per_year: f64,
    pub daily_periods_per_year: f64,
}

/// Settings for the MILP solve
pub struct SolverSettings {
    // Wall-clock bound on a single solve before the scenario is abandoned
    pub default_time_limit: Duration,
    // Spends at or below this are solver noise, not purchases
    pub spend_epsilon: f64,
}

/// Numerical guards shared across the engine
pub struct NumericGuards {
    // Added to the stdev denominator so zero-variance returns stay finite
    pub sharpe_epsilon: f64,
}

/// The Master Engine Configuration
pub struct EngineConfig {
    pub annualization: AnnualizationConfig,
    pub solver: SolverSettings,
    pub guards: NumericGuards,
}

pub const ENGINE: EngineConfig = EngineConfig {
    annualization: AnnualizationConfig {
        four_hour_periods_per_year: 2190.0,
        daily_periods_per_year: 365.0,
    },

    solver: SolverSettings {
        default_time_limit: Duration::from_secs(30),
        spend_epsilon: 1e-6,
    },

    guards: NumericGuards {
        sharpe_epsilon: 1e-9,
    },
};
