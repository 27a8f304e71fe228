//! Utility modules: usage tracking, latency measurement, timeout, log previews.

pub mod latency;
pub mod preview;
pub mod timeout;
pub mod usage;

pub use latency::track_latency;
pub use preview::{preview, INPUT_PREVIEW_BYTES, OUTPUT_PREVIEW_BYTES};
pub use timeout::with_timeout;
pub use usage::{TokenCounts, UsageTotals, UsageTracker};
