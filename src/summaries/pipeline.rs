//! The multi-stage summary pipeline.
//!
//! Two branches run concurrently inside one task:
//!
//! ```text
//! refine:  summarize -> refine
//! tags:    (positive_tags || negative_tags) -> merge_tags
//! ```
//!
//! The first failing stage fails the job and drops whatever is still in
//! flight in the other branch.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::{PenwrightError, Result};
use crate::generation::{self, StructuredOutput};
use crate::pricing::{round_for_storage, CostCalculator};
use crate::provider::LanguageModelClient;
use crate::types::{ModelMessage, TokenUsage};
use crate::util::{preview, track_latency, UsageTracker, OUTPUT_PREVIEW_BYTES};

use super::config::{StageKind, SummaryConfig};
use super::types::{AllTags, Tags};

/// Most tags kept per list.
pub const MAX_TAGS: usize = 5;

/// Aggregate output of one summary job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub summary: String,
    pub positive_tags: Vec<String>,
    pub negative_tags: Vec<String>,
    /// Sum of all stage costs rounded to 4 decimal places, or `None` if any
    /// stage could not be priced.
    pub cost: Option<Decimal>,
    /// Wall-clock seconds for both branches.
    pub latency_seconds: f64,
}

/// Output of one stage and its cost.
#[derive(Debug, Clone, PartialEq)]
struct StageOutput<T> {
    value: T,
    cost: Option<Decimal>,
}

/// Runs one summary job. Owns the usage tracker for that job.
pub struct SummaryPipeline {
    client: Arc<dyn LanguageModelClient>,
    config: Arc<SummaryConfig>,
    tracker: UsageTracker,
}

impl SummaryPipeline {
    pub fn new(
        client: Arc<dyn LanguageModelClient>,
        config: Arc<SummaryConfig>,
        calculator: CostCalculator,
    ) -> Self {
        Self {
            client,
            config,
            tracker: UsageTracker::new(calculator),
        }
    }

    /// Usage recorded so far by this job.
    pub fn tracker(&self) -> &UsageTracker {
        &self.tracker
    }

    /// Run both branches for `entity_name` over `reviews`.
    ///
    /// Callers ensure there are at least
    /// [`MIN_SOURCES_FOR_SUMMARY`](super::types::MIN_SOURCES_FOR_SUMMARY)
    /// reviews.
    pub async fn run(&self, entity_name: &str, reviews: &[String]) -> Result<SummaryResult> {
        let context = review_context(entity_name, reviews);

        let (outcome, latency_seconds) = track_latency(async {
            tokio::try_join!(self.refine_branch(&context), self.tags_branch(&context))
        })
        .await;

        let (summary, tags) = outcome.map_err(|err| {
            error!(error = %err, "summary pipeline failed");
            err
        })?;

        let (positive_tags, negative_tags) =
            normalize_tags(tags.value.positive_tags, tags.value.negative_tags);
        let cost = sum_costs([summary.cost, tags.cost]).map(round_for_storage);

        info!(
            latency_seconds,
            cost = ?cost,
            positive = positive_tags.len(),
            negative = negative_tags.len(),
            "summary pipeline complete"
        );

        Ok(SummaryResult {
            summary: summary.value,
            positive_tags,
            negative_tags,
            cost,
            latency_seconds,
        })
    }

    async fn refine_branch(&self, context: &str) -> Result<StageOutput<String>> {
        let draft = self.respond(StageKind::Summarize, context.to_string()).await?;
        let final_summary = self
            .respond(StageKind::Refine, format!("{context}, summary: {}", draft.value))
            .await?;

        Ok(StageOutput {
            value: final_summary.value,
            cost: sum_costs([draft.cost, final_summary.cost]),
        })
    }

    async fn tags_branch(&self, context: &str) -> Result<StageOutput<AllTags>> {
        let (positive, negative) = tokio::try_join!(
            self.respond_structured::<Tags>(StageKind::PositiveTags, context.to_string()),
            self.respond_structured::<Tags>(StageKind::NegativeTags, context.to_string()),
        )?;

        let merge_input = format!(
            "Positive tags: {}, Negative tags: {}",
            json_list(&positive.value.tags),
            json_list(&negative.value.tags)
        );
        let merged = self
            .respond_structured::<AllTags>(StageKind::MergeTags, merge_input)
            .await?;

        Ok(StageOutput {
            value: merged.value,
            cost: sum_costs([positive.cost, negative.cost, merged.cost]),
        })
    }

    async fn respond(&self, kind: StageKind, user_message: String) -> Result<StageOutput<String>> {
        let stage = self.config.stage(kind);
        debug!(stage = %kind, model = %stage.model, "stage started");

        let messages = vec![
            ModelMessage::system(stage.system_message.as_str()),
            ModelMessage::user(user_message),
        ];
        let completion = generation::parse_simple(self.client.as_ref(), &stage.model, messages)
            .await
            .map_err(|err| {
                error!(stage = %kind, error = %err, "stage failed");
                err
            })?;

        debug!(
            stage = %kind,
            output = %preview(&completion.text, OUTPUT_PREVIEW_BYTES),
            "stage finished"
        );
        Ok(StageOutput {
            cost: self.price(kind, &completion.model, completion.usage.as_ref()),
            value: completion.text,
        })
    }

    async fn respond_structured<T: StructuredOutput>(
        &self,
        kind: StageKind,
        user_message: String,
    ) -> Result<StageOutput<T>> {
        let stage = self.config.stage(kind);
        debug!(stage = %kind, model = %stage.model, "stage started");

        let completion = generation::call_structured::<T>(
            self.client.as_ref(),
            &stage.model,
            &stage.system_message,
            &user_message,
        )
        .await
        .map_err(|err| {
            error!(stage = %kind, error = %err, "stage failed");
            err
        })?;

        debug!(
            stage = %kind,
            output = %preview(&completion.raw_text, OUTPUT_PREVIEW_BYTES),
            "stage finished"
        );
        Ok(StageOutput {
            cost: self.price(kind, &completion.model, completion.usage.as_ref()),
            value: completion.object,
        })
    }

    fn price(&self, kind: StageKind, model: &str, usage: Option<&TokenUsage>) -> Option<Decimal> {
        let priced = usage
            .ok_or_else(|| PenwrightError::UsageMissing(model.to_string()))
            .and_then(|usage| self.tracker.track_usage(usage));
        match priced {
            Ok(cost) => Some(cost),
            Err(err) => {
                warn!(stage = %kind, model, error = %err, "stage cost unavailable");
                None
            }
        }
    }
}

/// `Hotel name: <name>, reviews: <JSON list>`
fn review_context(entity_name: &str, reviews: &[String]) -> String {
    format!("Hotel name: {entity_name}, reviews: {}", json_list(reviews))
}

fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| format!("{items:?}"))
}

/// Sum stage costs. Any unpriced stage makes the total unknown.
pub fn sum_costs(costs: impl IntoIterator<Item = Option<Decimal>>) -> Option<Decimal> {
    costs
        .into_iter()
        .try_fold(Decimal::ZERO, |total, cost| cost.map(|c| total + c))
}

/// Clean up merged tag lists.
///
/// Trims, drops empty and case-insensitive duplicate tags, removes from the
/// negative list any tag also present in the positive list, and keeps at
/// most [`MAX_TAGS`] per list. Order is preserved.
pub fn normalize_tags(positive: Vec<String>, negative: Vec<String>) -> (Vec<String>, Vec<String>) {
    fn clean(tags: Vec<String>, taken: &mut HashSet<String>) -> Vec<String> {
        tags.into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && taken.insert(t.to_lowercase()))
            .take(MAX_TAGS)
            .collect()
    }

    let mut seen = HashSet::new();
    let positive = clean(positive, &mut seen);
    // Positive tags claim their keys first, so overlaps land on the positive side.
    let negative = clean(negative, &mut seen);
    (positive, negative)
}
