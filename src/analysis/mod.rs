// Scoring and risk diagnostics
pub mod risk_metrics;
pub mod scenario;

pub use risk_metrics::{RiskMetrics, SamplingFrequency, evaluate};
pub use scenario::score;
