//! Content generation with persistence.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{PenwrightError, Result};
use crate::persistence::{Repository, Stored};
use crate::pricing::round_for_storage;
use crate::prompts::{Function, OutputFormat, Tone};
use crate::util::track_latency;

use super::generator::{ContentGenerator, GeneratedContent};
use super::request::ContentEnrichmentRequest;

/// Stored result of one content-enrichment call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub metadata: Map<String, Value>,
    pub function: Function,
    pub tone: Option<Tone>,
    pub user_instructions: Option<String>,
    pub existing_text: Option<String>,
    pub ai_response: String,
    pub output_format: OutputFormat,
    pub ai_model: Option<String>,
    pub latency_ms: Option<u64>,
    /// Rounded to 4 decimal places; `None` when the call was not priced.
    pub cost_usd: Option<Decimal>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub failed: bool,
}

/// Result of [`ContentService::generate_content`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOutcome {
    pub id: Uuid,
    pub content: GeneratedContent,
}

/// Validates, generates, and stores content-enrichment results.
pub struct ContentService {
    generator: ContentGenerator,
    store: Arc<dyn Repository<ContentRecord>>,
}

impl ContentService {
    pub fn new(generator: ContentGenerator, store: Arc<dyn Repository<ContentRecord>>) -> Self {
        Self { generator, store }
    }

    pub fn generator(&self) -> &ContentGenerator {
        &self.generator
    }

    #[instrument(skip_all)]
    pub async fn generate_content(&self, request: &ContentEnrichmentRequest) -> Result<ContentOutcome> {
        request.validate()?;
        let data = request.function_data()?;

        let (result, latency) = track_latency(self.generator.generate(request)).await;
        let content = result?;

        let record = ContentRecord {
            metadata: request.metadata.clone(),
            function: data.function,
            tone: data.tone,
            user_instructions: data.user_instructions.map(str::to_string),
            existing_text: data.existing_text.map(str::to_string),
            ai_response: content.text.clone(),
            output_format: request.output_format,
            ai_model: Some(content.model.clone()),
            latency_ms: Some((latency * 1_000.0).round() as u64),
            cost_usd: content.cost.map(round_for_storage),
            accepted_at: None,
            failed: false,
        };
        let stored = self.store.create(record).await?;

        info!(id = %stored.id, function = %data.function, latency, "content stored");

        Ok(ContentOutcome {
            id: stored.id,
            content,
        })
    }

    /// Mark a stored result as accepted by the user.
    #[instrument(skip(self))]
    pub async fn accept(&self, id: Uuid) -> Result<Stored<ContentRecord>> {
        let stored = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PenwrightError::Persistence(format!("content {id} not found")))?;

        let mut record = stored.data;
        record.accepted_at = Some(Utc::now());
        let updated = self.store.update(id, record).await?;

        info!(%id, "content accepted");
        Ok(updated)
    }
}
