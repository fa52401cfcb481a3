use std::time::Duration;

use thiserror::Error;

/// Failure taxonomy for the strategy engine.
///
/// `EmptySeries`, `Infeasible` and `NoScheduledDates` are terminal for the
/// scenario being computed: the caller surfaces them and skips reporting for
/// that asset/strategy pair. Nothing in here is retried automatically.
#[derive(Error, Debug)]
pub enum StrategyError {
    /// The price series contains no periods to operate on.
    #[error("price series contains no periods")]
    EmptySeries,

    /// Price series periods are out of order or share a timestamp.
    #[error("price series is not strictly ordered: {0}")]
    UnorderedSeries(String),

    /// No spending schedule satisfies all constraint families at once.
    #[error("no spending schedule satisfies the configured caps and per-trade bounds")]
    Infeasible,

    /// The blind baseline cadence produced no purchase dates.
    #[error("cadence of {cadence_days} days produced no purchase dates in the window")]
    NoScheduledDates { cadence_days: u32 },

    /// The MILP solve exceeded its wall-clock budget.
    #[error("solve exceeded the {} s time budget", .0.as_secs())]
    SolverTimeout(Duration),

    /// Caller-supplied parameters failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Unexpected solver backend failure.
    #[error("solver failure: {0}")]
    Solver(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, StrategyError>;
