//! Token usage as reported by the model provider.

use serde::{Deserialize, Serialize};

/// Breakdown of the input side of a call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InputTokensDetails {
    #[serde(default)]
    pub cached_tokens: u64,
}

/// Breakdown of the output side of a call. Informational only, never priced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputTokensDetails {
    #[serde(default)]
    pub reasoning_tokens: u64,
}

/// Token consumption of one completed LLM call.
///
/// Mirrors the provider's usage object. `total_tokens` is carried as
/// reported and is not checked against `input_tokens + output_tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    /// Model the provider reports as having served the call.
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens_details: Option<InputTokensDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens_details: Option<OutputTokensDetails>,
}

impl TokenUsage {
    /// Usage with no cached or reasoning details.
    pub fn new(model: impl Into<String>, input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
            model: model.into(),
            input_tokens_details: None,
            output_tokens_details: None,
        }
    }

    pub fn with_cached_tokens(mut self, cached_tokens: u64) -> Self {
        self.input_tokens_details = Some(InputTokensDetails { cached_tokens });
        self
    }

    pub fn with_reasoning_tokens(mut self, reasoning_tokens: u64) -> Self {
        self.output_tokens_details = Some(OutputTokensDetails { reasoning_tokens });
        self
    }

    /// Cached input tokens as reported (0 when absent).
    pub fn cached_tokens(&self) -> u64 {
        self.input_tokens_details
            .map(|d| d.cached_tokens)
            .unwrap_or(0)
    }

    /// Whether any of the input tokens were served from the provider cache.
    pub fn is_cached(&self) -> bool {
        self.cached_tokens() > 0
    }

    /// Input tokens billed at the full input rate.
    pub fn non_cached_input_tokens(&self) -> u64 {
        self.input_tokens.saturating_sub(self.cached_tokens())
    }
}
