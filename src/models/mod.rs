// Data models for strategy evaluation
// These modules contain pure data shapes independent of solver/CLI concerns

pub mod price_series;
pub mod purchase_plan;
pub mod report;

pub use price_series::PriceSeries;
pub use purchase_plan::{ConstraintParams, PurchaseEvent, PurchasePlan};
pub use report::{BlindScenario, ScenarioSummary, StrategyComparison};
