//! Per-model token pricing.
//!
//! Rates are USD per 1,000,000 tokens. The table is immutable once built;
//! dated snapshot names (e.g. `gpt-4o-2024-08-06`) are stored as aliases
//! that share their base model's rates.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use bon::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PenwrightError, Result};

static DEFAULT_TABLE: OnceLock<Arc<PricingTable>> = OnceLock::new();

/// Rates for one model. A missing cached-input rate means cached tokens
/// contribute nothing to the cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct PricingEntry {
    #[serde(rename = "input")]
    pub input_rate: Decimal,
    #[serde(rename = "cached_input", default, skip_serializing_if = "Option::is_none")]
    pub cached_input_rate: Option<Decimal>,
    #[serde(rename = "output")]
    pub output_rate: Decimal,
}

/// Rate in thousandths of a dollar, so `rate(2_500)` is $2.50.
const fn rate(thousandths: u32) -> Decimal {
    Decimal::from_parts(thousandths, 0, 0, false, 3)
}

// (model, input, cached input, output)
const OPENAI_RATES: &[(&str, u32, Option<u32>, u32)] = &[
    ("gpt-4.1", 2_000, Some(500), 8_000),
    ("gpt-4.1-mini", 400, Some(100), 1_600),
    ("gpt-4.1-nano", 100, Some(25), 400),
    ("gpt-4.5-preview", 75_000, Some(37_500), 150_000),
    ("gpt-4o", 2_500, Some(1_250), 10_000),
    ("gpt-4o-mini", 150, Some(75), 600),
    ("gpt-4o-audio-preview", 2_500, None, 10_000),
    ("gpt-4o-realtime-preview", 5_000, Some(2_500), 20_000),
    ("gpt-4o-mini-audio-preview", 150, None, 600),
    ("gpt-4o-mini-realtime-preview", 600, Some(300), 2_400),
    ("gpt-4o-mini-search-preview", 150, None, 600),
    ("gpt-4o-search-preview", 2_500, None, 10_000),
    ("o1", 15_000, Some(7_500), 60_000),
    ("o1-pro", 150_000, None, 600_000),
    ("o1-mini", 1_100, Some(550), 4_400),
    ("o3", 10_000, Some(2_500), 40_000),
    ("o3-mini", 1_100, Some(550), 4_400),
    ("o4-mini", 1_100, Some(275), 4_400),
    ("computer-use-preview", 3_000, None, 12_000),
];

// (base model, dated snapshot)
const DATED_ALIASES: &[(&str, &str)] = &[
    ("gpt-4.1", "gpt-4.1-2025-04-14"),
    ("gpt-4.1-mini", "gpt-4.1-mini-2025-04-14"),
    ("gpt-4.1-nano", "gpt-4.1-nano-2025-04-14"),
    ("gpt-4.5-preview", "gpt-4.5-preview-2025-02-27"),
    ("gpt-4o", "gpt-4o-2024-08-06"),
    ("gpt-4o-mini", "gpt-4o-mini-2024-07-18"),
    ("gpt-4o-audio-preview", "gpt-4o-audio-preview-2024-12-17"),
    ("gpt-4o-realtime-preview", "gpt-4o-realtime-preview-2024-12-17"),
    ("gpt-4o-mini-audio-preview", "gpt-4o-mini-audio-preview-2024-12-17"),
    ("gpt-4o-mini-realtime-preview", "gpt-4o-mini-realtime-preview-2024-12-17"),
    ("o1", "o1-2024-12-17"),
    ("o1-pro", "o1-pro-2025-03-19"),
    ("o3", "o3-2025-04-16"),
    ("o4-mini", "o4-mini-2025-04-16"),
    ("o3-mini", "o3-mini-2025-01-31"),
    ("o1-mini", "o1-mini-2024-09-12"),
    ("gpt-4o-mini-search-preview", "gpt-4o-mini-search-preview-2025-03-11"),
    ("gpt-4o-search-preview", "gpt-4o-search-preview-2025-03-11"),
    ("computer-use-preview", "computer-use-preview-2025-03-11"),
];

/// Immutable model → rates lookup, keyed by exact model string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTable {
    entries: HashMap<String, PricingEntry>,
}

impl PricingTable {
    pub fn builder() -> PricingTableBuilder {
        PricingTableBuilder::default()
    }

    /// Built-in OpenAI rates, including every dated snapshot alias.
    pub fn openai_default() -> Self {
        let mut entries: HashMap<String, PricingEntry> = OPENAI_RATES
            .iter()
            .map(|&(model, input, cached, output)| {
                let entry = PricingEntry::builder()
                    .input_rate(rate(input))
                    .maybe_cached_input_rate(cached.map(rate))
                    .output_rate(rate(output))
                    .build();
                (model.to_string(), entry)
            })
            .collect();

        for &(base, dated) in DATED_ALIASES {
            if let Some(entry) = entries.get(base).copied() {
                entries.insert(dated.to_string(), entry);
            }
        }

        Self { entries }
    }

    /// Shared, lazily built copy of [`PricingTable::openai_default`].
    pub fn shared() -> Arc<PricingTable> {
        DEFAULT_TABLE
            .get_or_init(|| Arc::new(Self::openai_default()))
            .clone()
    }

    /// Parse a pricing table from TOML.
    ///
    /// ```toml
    /// [models."gpt-4.1"]
    /// input = "2.00"
    /// cached_input = "0.50"
    /// output = "8.00"
    ///
    /// [aliases]
    /// "gpt-4.1-2025-04-14" = "gpt-4.1"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: PricingFile = toml::from_str(text)
            .map_err(|e| PenwrightError::Configuration(format!("invalid pricing table: {e}")))?;

        let mut builder = Self::builder();
        for (model, entry) in file.models {
            builder = builder.entry(model, entry);
        }
        for (alias, base) in file.aliases {
            builder = builder.alias(base, alias);
        }
        builder.build()
    }

    /// Load a pricing table from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn get(&self, model: &str) -> Option<&PricingEntry> {
        self.entries.get(model)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.entries.contains_key(model)
    }

    /// Model names in sorted order.
    pub fn models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        models.sort_unstable();
        models
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::openai_default()
    }
}

#[derive(Deserialize)]
struct PricingFile {
    models: HashMap<String, PricingEntry>,
    #[serde(default)]
    aliases: HashMap<String, String>,
}

/// Collects entries and aliases, then freezes them into a [`PricingTable`].
#[derive(Debug, Default)]
pub struct PricingTableBuilder {
    entries: HashMap<String, PricingEntry>,
    aliases: Vec<(String, String)>,
}

impl PricingTableBuilder {
    pub fn entry(mut self, model: impl Into<String>, entry: PricingEntry) -> Self {
        self.entries.insert(model.into(), entry);
        self
    }

    /// Price `alias` exactly like `base`.
    pub fn alias(mut self, base: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.push((base.into(), alias.into()));
        self
    }

    /// Fails if an alias points at a model that has no entry.
    pub fn build(self) -> Result<PricingTable> {
        let mut entries = self.entries;
        for (base, alias) in self.aliases {
            let entry = entries.get(&base).copied().ok_or_else(|| {
                PenwrightError::Configuration(format!(
                    "alias '{alias}' refers to unpriced model '{base}'"
                ))
            })?;
            entries.insert(alias, entry);
        }
        Ok(PricingTable { entries })
    }
}
