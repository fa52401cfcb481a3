use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StrategyError};

/// Caller-supplied spending constraints for one optimization scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConstraintParams {
    pub total_budget: f64,
    pub monthly_cap: f64,
    pub weekly_cap: f64,
    pub min_per_trade: f64,
    pub max_per_trade: f64,
    /// Flat fee placeholder, carried for reporting; unit math stays gross.
    pub fee_percent: f64,
}

impl ConstraintParams {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("total_budget", self.total_budget),
            ("monthly_cap", self.monthly_cap),
            ("weekly_cap", self.weekly_cap),
            ("min_per_trade", self.min_per_trade),
            ("max_per_trade", self.max_per_trade),
            ("fee_percent", self.fee_percent),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(StrategyError::InvalidParams(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        if self.min_per_trade > self.max_per_trade {
            return Err(StrategyError::InvalidParams(format!(
                "min_per_trade ({}) exceeds max_per_trade ({})",
                self.min_per_trade, self.max_per_trade
            )));
        }
        Ok(())
    }
}

/// One executed purchase. `amount_spent = units_acquired * unit_price`
/// to floating tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PurchaseEvent {
    pub timestamp: DateTime<Utc>,
    pub amount_spent: f64,
    pub unit_price: f64,
    pub units_acquired: f64,
}

impl PurchaseEvent {
    /// Profit of this single purchase valued against a final closing price.
    pub fn profit_at(&self, final_close: f64) -> f64 {
        (final_close - self.unit_price) / self.unit_price * self.amount_spent
    }
}

/// Ordered record of executed purchases, produced by either the optimizer
/// or the blind baseline and never mutated after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchasePlan {
    events: Vec<PurchaseEvent>,
}

impl PurchasePlan {
    pub fn new(events: Vec<PurchaseEvent>) -> Self {
        PurchasePlan { events }
    }

    pub fn events(&self) -> &[PurchaseEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn total_spent(&self) -> f64 {
        self.events.iter().map(|e| e.amount_spent).sum()
    }

    pub fn total_units(&self) -> f64 {
        self.events.iter().map(|e| e.units_acquired).sum()
    }
}
