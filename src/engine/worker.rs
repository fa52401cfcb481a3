//! Worker-thread plumbing around the blocking MILP solve.
//!
//! Each solve operates on a private series and constraint set, so callers
//! comparing several assets may invoke this from independent threads with
//! no cross-talk.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::engine::optimizer;
use crate::error::{Result, StrategyError};
use crate::models::{ConstraintParams, PriceSeries, PurchasePlan};

/// Run `optimize` on a dedicated thread with a wall-clock bound.
///
/// A solve that misses the deadline keeps running on its detached thread
/// until completion, but its result is discarded and the caller gets
/// `SolverTimeout`. Infeasible models are never retried; retrying cannot
/// change feasibility.
pub fn solve_with_deadline(
    series: &PriceSeries,
    params: &ConstraintParams,
    time_limit: Duration,
) -> Result<PurchasePlan> {
    let (tx, rx) = mpsc::channel();
    let series = series.clone();
    let params = *params;

    thread::spawn(move || {
        let started = Instant::now();
        let result = optimizer::optimize(&series, &params);
        // Receiver may be gone if the deadline already fired
        let _ = tx.send((result, started.elapsed()));
    });

    match rx.recv_timeout(time_limit) {
        Ok((result, elapsed)) => {
            info!("MILP solve finished in {} ms", elapsed.as_millis());
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!(
                "MILP solve abandoned after {} s; result will be discarded",
                time_limit.as_secs()
            );
            Err(StrategyError::SolverTimeout(time_limit))
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(StrategyError::Solver(
            "solver thread exited without a result".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePeriod;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};

    fn daily_series(len: usize) -> PriceSeries {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let periods = (0..len)
            .map(|i| {
                let open = 100.0 + (i % 7) as f64;
                PricePeriod::new(
                    base + ChronoDuration::days(i as i64),
                    open,
                    open,
                    open,
                    open,
                )
            })
            .collect();
        PriceSeries::new(periods).unwrap()
    }

    fn params() -> ConstraintParams {
        ConstraintParams {
            total_budget: 1000.0,
            monthly_cap: 500.0,
            weekly_cap: 250.0,
            min_per_trade: 50.0,
            max_per_trade: 200.0,
            fee_percent: 0.0,
        }
    }

    #[test]
    fn generous_deadline_returns_the_plan() {
        let series = daily_series(30);
        let plan = solve_with_deadline(&series, &params(), Duration::from_secs(60)).unwrap();
        assert!(!plan.is_empty());
        assert!(plan.total_spent() <= 1000.0 + 1e-6);
    }

    #[test]
    fn zero_deadline_times_out() {
        // Large enough that spawn + solve cannot beat an already-expired
        // deadline
        let series = daily_series(2000);
        let result = solve_with_deadline(&series, &params(), Duration::ZERO);
        assert!(matches!(result, Err(StrategyError::SolverTimeout(_))));
    }
}
