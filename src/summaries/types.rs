//! Summary request and structured-output types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::error::{PenwrightError, Result};
use crate::generation::StructuredOutput;

/// Fewest sources a summary job may be started with.
pub const MIN_SOURCES_FOR_SUMMARY: usize = 3;

/// One review contributing to a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: Uuid,
    pub review: String,
}

/// Kind of review set being summarized.
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
pub enum SourceType {
    ClientSupplierReviews,
    AdvisorSupplierReviews,
    AdvisorReviews,
    AdvisorBrandReviews,
}

/// A summarization job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub entity_id: Uuid,
    pub entity_name: String,
    pub source_type: SourceType,
    pub sources: Vec<Source>,
}

impl SummaryRequest {
    /// Boundary check: at least [`MIN_SOURCES_FOR_SUMMARY`] sources.
    ///
    /// The pipeline assumes this already passed and never calls it.
    pub fn validate(&self) -> Result<()> {
        if self.sources.len() < MIN_SOURCES_FOR_SUMMARY {
            return Err(PenwrightError::InvalidRequest(format!(
                "At least {MIN_SOURCES_FOR_SUMMARY} sources are required for {}, but only {} were provided",
                self.entity_id,
                self.sources.len()
            )));
        }
        Ok(())
    }

    pub fn source_ids(&self) -> Vec<Uuid> {
        self.sources.iter().map(|s| s.id).collect()
    }

    pub fn reviews(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.review.clone()).collect()
    }
}

/// Reply of the positive and negative tag stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub tags: Vec<String>,
}

impl StructuredOutput for Tags {
    const NAME: &'static str = "Tags";

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "tags": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "List of tags for the summary"
                }
            },
            "required": ["tags"],
            "additionalProperties": false
        })
    }
}

/// Reply of the merge stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllTags {
    #[serde(default)]
    pub positive_tags: Vec<String>,
    #[serde(default)]
    pub negative_tags: Vec<String>,
}

impl StructuredOutput for AllTags {
    const NAME: &'static str = "AllTags";

    fn schema() -> Value {
        let list = |description: &str| {
            json!({
                "type": "array",
                "items": {"type": "string"},
                "description": description
            })
        };
        json!({
            "type": "object",
            "properties": {
                "positive_tags": list("List of positive tags for the summary"),
                "negative_tags": list("List of negative tags for the summary")
            },
            "required": ["positive_tags", "negative_tags"],
            "additionalProperties": false
        })
    }
}
