//! Scenario scoring: purchase plan + final close -> summary statistics.
//!
//! Pure function used uniformly for optimizer and blind-baseline plans, so
//! the two strategies stay directly comparable.

use crate::models::{PurchasePlan, ScenarioSummary};

/// Value a purchase plan at the series' final closing price.
/// An empty plan scores as all zeros.
pub fn score(plan: &PurchasePlan, final_close: f64) -> ScenarioSummary {
    let total_invested = plan.total_spent();
    let total_units = plan.total_units();
    let final_value = total_units * final_close;

    ScenarioSummary {
        total_invested,
        total_units,
        final_value,
        profit: final_value - total_invested,
        trade_count: plan.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PurchaseEvent;
    use chrono::{TimeZone, Utc};

    fn sample_plan() -> PurchasePlan {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        PurchasePlan::new(vec![
            PurchaseEvent {
                timestamp: ts,
                amount_spent: 200.0,
                unit_price: 100.0,
                units_acquired: 2.0,
            },
            PurchaseEvent {
                timestamp: ts + chrono::Duration::days(7),
                amount_spent: 150.0,
                unit_price: 50.0,
                units_acquired: 3.0,
            },
        ])
    }

    #[test]
    fn summary_values_plan_at_final_close() {
        let summary = score(&sample_plan(), 120.0);
        assert!((summary.total_invested - 350.0).abs() < 1e-9);
        assert!((summary.total_units - 5.0).abs() < 1e-9);
        assert!((summary.final_value - 600.0).abs() < 1e-9);
        assert!((summary.profit - 250.0).abs() < 1e-9);
        assert_eq!(summary.trade_count, 2);
    }

    #[test]
    fn scoring_is_pure() {
        let plan = sample_plan();
        assert_eq!(score(&plan, 120.0), score(&plan, 120.0));
    }

    #[test]
    fn empty_plan_scores_zero() {
        let summary = score(&PurchasePlan::default(), 99.0);
        assert_eq!(summary, ScenarioSummary::empty());
    }
}
