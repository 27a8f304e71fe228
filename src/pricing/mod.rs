//! Pricing tables and cost calculation.

pub mod cost;
pub mod table;

pub use cost::{round_for_storage, CostBreakdown, CostCalculator, STORAGE_SCALE};
pub use table::{PricingEntry, PricingTable, PricingTableBuilder};
