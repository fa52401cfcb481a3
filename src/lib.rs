// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{RiskMetrics, SamplingFrequency, evaluate, score};
pub use data::load_price_series;
pub use domain::PricePeriod;
pub use engine::{optimize, simulate_blind, solve_with_deadline};
pub use error::StrategyError;
pub use models::{
    BlindScenario, ConstraintParams, PriceSeries, PurchaseEvent, PurchasePlan, ScenarioSummary,
    StrategyComparison,
};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV file with timestamp,open,high,low,close rows
    pub data: PathBuf,

    /// Scenario label used in the report (e.g. the asset symbol)
    #[arg(long, default_value = "asset")]
    pub label: String,

    /// Total investment budget over the whole window
    #[arg(long, default_value_t = 10_000.0)]
    pub total_budget: f64,

    /// Maximum spend per calendar month
    #[arg(long, default_value_t = 1_000.0)]
    pub monthly_cap: f64,

    /// Maximum spend per ISO calendar week
    #[arg(long, default_value_t = 250.0)]
    pub weekly_cap: f64,

    /// Minimum size of a nonzero purchase
    #[arg(long, default_value_t = 50.0)]
    pub min_per_trade: f64,

    /// Maximum size of a single purchase
    #[arg(long, default_value_t = 250.0)]
    pub max_per_trade: f64,

    /// Flat fee percentage placeholder, reported but not modeled
    #[arg(long, default_value_t = 0.1)]
    pub fee_percent: f64,

    /// Blind DCA cadence in days; repeat for several baselines
    #[arg(long = "cadence", default_values_t = [7u32, 30u32])]
    pub cadences: Vec<u32>,

    /// Bar sampling frequency, keys the risk-metric annualization
    #[arg(long, value_enum, default_value = "4h")]
    pub frequency: SamplingFrequency,

    /// Upper bound on MILP solve wall time, in seconds
    #[arg(long, default_value_t = config::ENGINE.solver.default_time_limit.as_secs())]
    pub solve_timeout_secs: u64,

    /// Emit the comparison as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
