//! Exact decimal cost of a single call.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::error::{PenwrightError, Result};
use crate::types::usage::TokenUsage;

use super::table::PricingTable;

/// One million, the denominator for per-million-token rates.
const ONE_MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Decimal places kept when a cost is stored.
pub const STORAGE_SCALE: u32 = 4;

/// Cost of one call split by pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CostBreakdown {
    pub cached_input: Decimal,
    pub non_cached_input: Decimal,
    pub output: Decimal,
}

impl CostBreakdown {
    pub fn total(&self) -> Decimal {
        self.cached_input + self.non_cached_input + self.output
    }
}

/// Prices token usage against an injected [`PricingTable`].
#[derive(Debug, Clone)]
pub struct CostCalculator {
    table: Arc<PricingTable>,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(PricingTable::shared())
    }
}

impl CostCalculator {
    pub fn new(table: Arc<PricingTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Per-tier cost of `usage` billed as `model`.
    ///
    /// Cached tokens reported above `input_tokens` are clamped to
    /// `input_tokens`.
    pub fn breakdown(&self, model: &str, usage: &TokenUsage) -> Result<CostBreakdown> {
        let pricing = self
            .table
            .get(model)
            .ok_or_else(|| PenwrightError::UnknownModel(model.to_string()))?;

        let reported_cached = usage.cached_tokens();
        if reported_cached > usage.input_tokens {
            warn!(
                model,
                cached_tokens = reported_cached,
                input_tokens = usage.input_tokens,
                "cached tokens exceed input tokens, clamping"
            );
        }
        let cached = reported_cached.min(usage.input_tokens);
        let non_cached = usage.input_tokens - cached;

        let cached_input = pricing
            .cached_input_rate
            .map(|rate| per_million(cached, rate))
            .unwrap_or(Decimal::ZERO);

        Ok(CostBreakdown {
            cached_input,
            non_cached_input: per_million(non_cached, pricing.input_rate),
            output: per_million(usage.output_tokens, pricing.output_rate),
        })
    }

    /// Total cost in USD of `usage` billed as `model`.
    pub fn calculate_cost(&self, model: &str, usage: &TokenUsage) -> Result<Decimal> {
        self.breakdown(model, usage).map(|b| b.total())
    }
}

fn per_million(tokens: u64, rate: Decimal) -> Decimal {
    Decimal::from(tokens) / ONE_MILLION * rate
}

/// Round a cost to the precision it is stored with.
pub fn round_for_storage(cost: Decimal) -> Decimal {
    cost.round_dp(STORAGE_SCALE)
}
