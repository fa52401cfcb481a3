//! MILP allocation optimizer.
//!
//! Chooses a per-period spend `x[t]` maximizing total units acquired
//! (`sum x[t] / open[t]`) subject to a global budget, calendar-month and
//! ISO-week caps, and a per-trade minimum/maximum enforced through the
//! fixed-charge pattern: a binary `b[t]` with
//! `min_per_trade * b[t] <= x[t] <= max_per_trade * b[t]` makes every
//! nonzero purchase land inside the per-trade bounds.
//!
//! A fresh model is constructed on every call; variables and constraints
//! are emitted in period order so a fixed input always produces the same
//! model and, with the pure-Rust backend, the same solve.

use chrono::{DateTime, Utc};
use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable, constraint,
    default_solver, variable,
};
use itertools::Itertools;
use log::{debug, info};

use crate::config::ENGINE;
use crate::domain::{PricePeriod, month_key, week_key};
use crate::error::{Result, StrategyError};
use crate::models::{ConstraintParams, PriceSeries, PurchaseEvent, PurchasePlan};

/// Solve the allocation MILP for one price series. Blocking; long series
/// can take seconds. See `worker::solve_with_deadline` for the bounded
/// variant.
pub fn optimize(series: &PriceSeries, params: &ConstraintParams) -> Result<PurchasePlan> {
    params.validate()?;
    if series.is_empty() {
        return Err(StrategyError::EmptySeries);
    }

    let periods = series.periods();
    let mut vars = ProblemVariables::new();

    let spends: Vec<Variable> = periods
        .iter()
        .map(|_| vars.add(variable().min(0.0).max(params.max_per_trade)))
        .collect();
    let indicators: Vec<Variable> = periods.iter().map(|_| vars.add(variable().binary())).collect();

    // Each period's spend buys units at that period's open
    let objective: Expression = periods
        .iter()
        .zip(&spends)
        .map(|(period, &x)| (1.0 / period.effective_open()) * x)
        .sum();

    let mut model = vars.maximise(objective).using(default_solver);

    // Global budget cap
    let total_spend: Expression = spends.iter().map(|&x| Expression::from(x)).sum();
    model = model.with(constraint!(total_spend <= params.total_budget));

    // Calendar caps. Timestamps are sorted, so each bucket is one
    // contiguous run of periods.
    let month_buckets = calendar_buckets(periods, month_key);
    for bucket in &month_buckets {
        let bucket_spend: Expression = bucket.iter().map(|&i| Expression::from(spends[i])).sum();
        model = model.with(constraint!(bucket_spend <= params.monthly_cap));
    }
    let week_buckets = calendar_buckets(periods, week_key);
    for bucket in &week_buckets {
        let bucket_spend: Expression = bucket.iter().map(|&i| Expression::from(spends[i])).sum();
        model = model.with(constraint!(bucket_spend <= params.weekly_cap));
    }

    // Fixed-charge linking: x is zero (b = 0) or inside the per-trade bounds
    for (&x, &b) in spends.iter().zip(&indicators) {
        model = model.with(constraint!(x >= params.min_per_trade * b));
        model = model.with(constraint!(x <= params.max_per_trade * b));
    }

    debug!(
        "allocation model: {} periods, {} month buckets, {} week buckets",
        periods.len(),
        month_buckets.len(),
        week_buckets.len()
    );

    let solution = model.solve().map_err(|err| match err {
        ResolutionError::Infeasible => StrategyError::Infeasible,
        other => StrategyError::Solver(other.to_string()),
    })?;

    let plan = extract_plan(periods, &spends, &solution);
    info!(
        "optimized schedule: {} purchases, {:.2} spent, {:.6} units",
        plan.len(),
        plan.total_spent(),
        plan.total_units()
    );
    Ok(plan)
}

/// Group period indices by a calendar key. Relies on the series' strict
/// timestamp ordering, which keeps every bucket contiguous and the bucket
/// order reproducible.
fn calendar_buckets<K: PartialEq>(
    periods: &[PricePeriod],
    key: impl Fn(DateTime<Utc>) -> K,
) -> Vec<Vec<usize>> {
    let chunks = periods
        .iter()
        .enumerate()
        .chunk_by(|(_, period)| key(period.timestamp));

    let mut buckets = Vec::new();
    for (_, group) in &chunks {
        buckets.push(group.map(|(idx, _)| idx).collect::<Vec<_>>());
    }
    buckets
}

/// Turn the solved spends into a purchase plan, dropping solver noise.
fn extract_plan(
    periods: &[PricePeriod],
    spends: &[Variable],
    solution: &impl Solution,
) -> PurchasePlan {
    let mut events = Vec::new();
    for (period, &var) in periods.iter().zip(spends) {
        let amount_spent = solution.value(var);
        if amount_spent <= ENGINE.solver.spend_epsilon {
            continue;
        }
        let unit_price = period.effective_open();
        events.push(PurchaseEvent {
            timestamp: period.timestamp,
            amount_spent,
            unit_price,
            units_acquired: amount_spent / unit_price,
        });
    }
    PurchasePlan::new(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;

    fn daily_series(opens: &[f64]) -> PriceSeries {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let periods = opens
            .iter()
            .enumerate()
            .map(|(i, &open)| {
                PricePeriod::new(base + Duration::days(i as i64), open, open, open, open)
            })
            .collect();
        PriceSeries::new(periods).unwrap()
    }

    fn params(
        total_budget: f64,
        monthly_cap: f64,
        weekly_cap: f64,
        min_per_trade: f64,
        max_per_trade: f64,
    ) -> ConstraintParams {
        ConstraintParams {
            total_budget,
            monthly_cap,
            weekly_cap,
            min_per_trade,
            max_per_trade,
            fee_percent: 0.0,
        }
    }

    fn assert_respects_constraints(plan: &PurchasePlan, p: &ConstraintParams) {
        assert!(plan.total_spent() <= p.total_budget + 1e-6, "budget cap violated");

        let mut monthly: HashMap<(i32, u32), f64> = HashMap::new();
        let mut weekly: HashMap<(i32, u32), f64> = HashMap::new();
        for event in plan.events() {
            assert!(
                event.amount_spent >= p.min_per_trade - 1e-6
                    && event.amount_spent <= p.max_per_trade + 1e-6,
                "per-trade bounds violated: {}",
                event.amount_spent
            );
            *monthly.entry(month_key(event.timestamp)).or_default() += event.amount_spent;
            *weekly.entry(week_key(event.timestamp)).or_default() += event.amount_spent;
        }
        for (_, spent) in monthly {
            assert!(spent <= p.monthly_cap + 1e-6, "monthly cap violated");
        }
        for (_, spent) in weekly {
            assert!(spent <= p.weekly_cap + 1e-6, "weekly cap violated");
        }
    }

    #[test]
    fn constant_price_spends_full_budget() {
        // 10 daily periods at open 100: the feasible maximum is
        // 1000 / 100 = 10 units, any full-budget plan within bounds
        let series = daily_series(&[100.0; 10]);
        let p = params(1000.0, 1000.0, 1000.0, 50.0, 200.0);

        let plan = optimize(&series, &p).unwrap();
        assert_respects_constraints(&plan, &p);
        assert!((plan.total_units() - 10.0).abs() < 1e-4);
        assert!((plan.total_spent() - 1000.0).abs() < 1e-4);
    }

    #[test]
    fn weekly_cap_limits_each_iso_week() {
        let series = daily_series(&[100.0; 14]);
        let p = params(1000.0, 1000.0, 100.0, 0.0, 200.0);

        let plan = optimize(&series, &p).unwrap();
        assert_respects_constraints(&plan, &p);
        // 2024-01-01 is a Monday: 14 days span exactly two ISO weeks,
        // so at most 200 can be deployed
        assert!(plan.total_spent() <= 200.0 + 1e-6);
    }

    #[test]
    fn minimum_per_trade_forces_chunky_purchases() {
        let series = daily_series(&[100.0, 100.0, 100.0]);
        let p = params(120.0, 1000.0, 1000.0, 50.0, 200.0);

        let plan = optimize(&series, &p).unwrap();
        assert_respects_constraints(&plan, &p);
        // Whole budget fits in a single trade, so 1.2 units is reachable
        assert!((plan.total_units() - 1.2).abs() < 1e-4);
    }

    #[test]
    fn cheapest_periods_are_preferred() {
        // One week, one month: only the budget and per-trade max bind.
        // Budget 400 with max 200 per trade must land on the two cheapest opens.
        let series = daily_series(&[100.0, 50.0, 100.0, 25.0, 100.0]);
        let p = params(400.0, 1000.0, 1000.0, 0.0, 200.0);

        let plan = optimize(&series, &p).unwrap();
        assert_respects_constraints(&plan, &p);
        // 200 at 25 plus 200 at 50 = 12 units
        assert!((plan.total_units() - 12.0).abs() < 1e-4);
    }

    #[test]
    fn objective_is_reproducible() {
        let series = daily_series(&[100.0, 90.0, 110.0, 95.0, 105.0, 80.0, 120.0]);
        let p = params(500.0, 500.0, 300.0, 50.0, 150.0);

        let first = optimize(&series, &p).unwrap();
        let second = optimize(&series, &p).unwrap();
        assert!((first.total_units() - second.total_units()).abs() < 1e-9);
        assert!((first.total_spent() - second.total_spent()).abs() < 1e-9);
    }

    #[test]
    fn single_period_series_is_valid() {
        let series = daily_series(&[100.0]);
        let p = params(1000.0, 1000.0, 1000.0, 50.0, 200.0);

        let plan = optimize(&series, &p).unwrap();
        assert_respects_constraints(&plan, &p);
        // One period, bounds [50, 200]: best is a single maximal trade
        assert!((plan.total_spent() - 200.0).abs() < 1e-4);
    }

    #[test]
    fn empty_series_fails_before_model_construction() {
        let series = PriceSeries::new(Vec::new()).unwrap();
        let p = params(1000.0, 1000.0, 1000.0, 50.0, 200.0);
        assert!(matches!(
            optimize(&series, &p),
            Err(StrategyError::EmptySeries)
        ));
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let series = daily_series(&[100.0; 3]);
        let p = params(1000.0, 1000.0, 1000.0, 300.0, 200.0);
        assert!(matches!(
            optimize(&series, &p),
            Err(StrategyError::InvalidParams(_))
        ));
    }

    #[test]
    fn min_above_caps_yields_empty_plan() {
        // A nonzero purchase would need at least 500, but the weekly cap is
        // 100: the only feasible schedule is to buy nothing
        let series = daily_series(&[100.0; 5]);
        let p = params(1000.0, 1000.0, 100.0, 500.0, 800.0);

        let plan = optimize(&series, &p).unwrap();
        assert!(plan.is_empty());
    }
}
