//! Per-stage model and system-message configuration.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::prompts;

/// The five model calls of a summary job.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StageKind {
    /// Refine step 1: draft summary.
    Summarize,
    /// Refine step 2: final summary from the draft.
    Refine,
    PositiveTags,
    NegativeTags,
    MergeTags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub model: String,
    pub system_message: String,
}

impl StageConfig {
    pub fn new(model: impl Into<String>, system_message: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_message: system_message.into(),
        }
    }
}

/// Static per-task configuration for the summary pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub summarize: StageConfig,
    pub refine: StageConfig,
    pub positive_tags: StageConfig,
    pub negative_tags: StageConfig,
    pub merge_tags: StageConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            summarize: StageConfig::new("gpt-4.1-mini", prompts::with_style_rules(prompts::SUMMARIZE)),
            refine: StageConfig::new("gpt-4.1", prompts::with_style_rules(prompts::REFINE)),
            positive_tags: StageConfig::new("gpt-4.1", prompts::POSITIVE_TAGS),
            negative_tags: StageConfig::new("gpt-4.1", prompts::NEGATIVE_TAGS),
            merge_tags: StageConfig::new("gpt-4.1-mini", prompts::MERGE_TAGS),
        }
    }
}

impl SummaryConfig {
    pub fn stage(&self, kind: StageKind) -> &StageConfig {
        match kind {
            StageKind::Summarize => &self.summarize,
            StageKind::Refine => &self.refine,
            StageKind::PositiveTags => &self.positive_tags,
            StageKind::NegativeTags => &self.negative_tags,
            StageKind::MergeTags => &self.merge_tags,
        }
    }

    fn stage_mut(&mut self, kind: StageKind) -> &mut StageConfig {
        match kind {
            StageKind::Summarize => &mut self.summarize,
            StageKind::Refine => &mut self.refine,
            StageKind::PositiveTags => &mut self.positive_tags,
            StageKind::NegativeTags => &mut self.negative_tags,
            StageKind::MergeTags => &mut self.merge_tags,
        }
    }

    /// Override the model of one stage.
    pub fn with_model(mut self, kind: StageKind, model: impl Into<String>) -> Self {
        self.stage_mut(kind).model = model.into();
        self
    }

    /// Override the system message of one stage.
    pub fn with_system_message(mut self, kind: StageKind, message: impl Into<String>) -> Self {
        self.stage_mut(kind).system_message = message.into();
        self
    }
}
