//! Per-model usage and cost accumulation.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::pricing::CostCalculator;
use crate::types::usage::TokenUsage;

/// Running totals for one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UsageTotals {
    pub cost: Decimal,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cached_input_tokens: u64,
    pub calls: u64,
}

impl UsageTotals {
    pub fn tokens(&self) -> TokenCounts {
        TokenCounts {
            input: self.input_tokens,
            output: self.output_tokens,
            cached_input: self.cached_input_tokens,
        }
    }
}

/// Token counters reported by [`UsageTracker::total_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TokenCounts {
    pub input: u64,
    pub output: u64,
    pub cached_input: u64,
}

/// Tracks cost and tokens per model for one unit of request processing.
///
/// Create one per top-level request; totals live until [`reset`](Self::reset)
/// or drop. Tracking takes `&self` so concurrent branches of a single job
/// can record into the same tracker.
#[derive(Debug)]
pub struct UsageTracker {
    calculator: CostCalculator,
    inner: RwLock<HashMap<String, UsageTotals>>,
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new(CostCalculator::default())
    }
}

impl UsageTracker {
    pub fn new(calculator: CostCalculator) -> Self {
        Self {
            calculator,
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn calculator(&self) -> &CostCalculator {
        &self.calculator
    }

    /// Price `usage` and add it to the totals of `usage.model`.
    ///
    /// Returns the cost of this call only. Nothing is recorded when the
    /// model is unpriced.
    pub fn track_usage(&self, usage: &TokenUsage) -> Result<Decimal> {
        let cost = self.calculator.calculate_cost(&usage.model, usage)?;

        let mut inner = self.write();
        let totals = inner.entry(usage.model.clone()).or_default();
        totals.cost += cost;
        totals.input_tokens += usage.input_tokens;
        totals.output_tokens += usage.output_tokens;
        totals.cached_input_tokens += usage.cached_tokens().min(usage.input_tokens);
        totals.calls += 1;

        Ok(cost)
    }

    /// Cumulative cost for one model, or across all models.
    pub fn total_cost(&self, model: Option<&str>) -> Decimal {
        let inner = self.read();
        match model {
            Some(model) => inner.get(model).map(|t| t.cost).unwrap_or(Decimal::ZERO),
            None => inner.values().map(|t| t.cost).sum(),
        }
    }

    /// Token counters keyed by model. Asking for an untracked model yields
    /// a zeroed entry for it.
    pub fn total_tokens(&self, model: Option<&str>) -> BTreeMap<String, TokenCounts> {
        let inner = self.read();
        match model {
            Some(model) => {
                let counts = inner.get(model).map(UsageTotals::tokens).unwrap_or_default();
                BTreeMap::from([(model.to_string(), counts)])
            }
            None => inner
                .iter()
                .map(|(model, totals)| (model.clone(), totals.tokens()))
                .collect(),
        }
    }

    pub fn totals(&self, model: &str) -> Option<UsageTotals> {
        self.read().get(model).copied()
    }

    /// Clear one model's totals, or everything.
    pub fn reset(&self, model: Option<&str>) {
        let mut inner = self.write();
        match model {
            Some(model) => {
                inner.remove(model);
            }
            None => inner.clear(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, UsageTotals>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, UsageTotals>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
