//! Blind DCA baseline: fixed cadence, fixed amount, no optimization.
//!
//! Used purely as a comparison strategy, so the per-purchase amount is the
//! budget split evenly over the schedule and is deliberately not subject to
//! the optimizer's per-trade bounds.

use chrono::Duration;
use log::info;

use crate::error::{Result, StrategyError};
use crate::models::{PriceSeries, PurchaseEvent, PurchasePlan};

/// Build the fixed-cadence purchase plan over the series' window.
///
/// Schedule dates run from the first period's timestamp to the last, every
/// `cadence_days`. Each date executes at the first period on or after it,
/// falling back to the last period when the schedule outruns the data.
pub fn simulate_blind(
    series: &PriceSeries,
    total_budget: f64,
    cadence_days: u32,
) -> Result<PurchasePlan> {
    if !total_budget.is_finite() || total_budget < 0.0 {
        return Err(StrategyError::InvalidParams(format!(
            "total_budget must be a non-negative finite number, got {total_budget}"
        )));
    }
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Err(StrategyError::EmptySeries);
    };
    if cadence_days == 0 {
        return Err(StrategyError::NoScheduledDates { cadence_days });
    }

    let mut schedule = Vec::new();
    let mut current = first.timestamp;
    while current <= last.timestamp {
        schedule.push(current);
        current += Duration::days(i64::from(cadence_days));
    }
    if schedule.is_empty() {
        return Err(StrategyError::NoScheduledDates { cadence_days });
    }

    let amount_per_purchase = total_budget / schedule.len() as f64;
    let mut events = Vec::with_capacity(schedule.len());
    for scheduled in schedule {
        let period = series
            .periods()
            .iter()
            .find(|p| p.timestamp >= scheduled)
            .unwrap_or(last);
        let unit_price = period.effective_open();
        events.push(PurchaseEvent {
            timestamp: period.timestamp,
            amount_spent: amount_per_purchase,
            unit_price,
            units_acquired: amount_per_purchase / unit_price,
        });
    }

    info!(
        "blind schedule: {} purchases of {:.2} every {} days",
        events.len(),
        amount_per_purchase,
        cadence_days
    );
    Ok(PurchasePlan::new(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePeriod;
    use chrono::{TimeZone, Utc};

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

    #[test]
    fn weekly_cadence_over_two_weeks_buys_twice() {
        let series = daily_series(&[100.0; 14]);
        let plan = simulate_blind(&series, 1000.0, 7).unwrap();

        assert_eq!(plan.len(), 2);
        for event in plan.events() {
            assert!((event.amount_spent - 500.0).abs() < 1e-9);
        }
        // Executions land on day 0 and day 7
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(plan.events()[0].timestamp, base);
        assert_eq!(plan.events()[1].timestamp, base + Duration::days(7));
    }

    #[test]
    fn cadence_longer_than_window_spends_everything_at_once() {
        let series = daily_series(&[100.0; 5]);
        let plan = simulate_blind(&series, 1000.0, 30).unwrap();

        assert_eq!(plan.len(), 1);
        assert!((plan.total_spent() - 1000.0).abs() < 1e-9);
        assert!((plan.total_units() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn schedule_beyond_data_falls_back_to_last_period() {
        // Periods only on days 0 and 1, but the window end is day 1, so a
        // 1-day cadence executes on both periods
        let series = daily_series(&[100.0, 200.0]);
        let plan = simulate_blind(&series, 300.0, 1).unwrap();

        assert_eq!(plan.len(), 2);
        assert!((plan.events()[0].unit_price - 100.0).abs() < 1e-9);
        assert!((plan.events()[1].unit_price - 200.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_fails() {
        let series = PriceSeries::new(Vec::new()).unwrap();
        assert!(matches!(
            simulate_blind(&series, 1000.0, 7),
            Err(StrategyError::EmptySeries)
        ));
    }

    #[test]
    fn zero_cadence_produces_no_dates() {
        let series = daily_series(&[100.0; 5]);
        assert!(matches!(
            simulate_blind(&series, 1000.0, 0),
            Err(StrategyError::NoScheduledDates { cadence_days: 0 })
        ));
    }

    #[test]
    fn negative_budget_is_rejected() {
        let series = daily_series(&[100.0; 5]);
        assert!(matches!(
            simulate_blind(&series, -1.0, 7),
            Err(StrategyError::InvalidParams(_))
        ));
    }
}
