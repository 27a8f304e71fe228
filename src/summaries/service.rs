//! Summary jobs: pipeline, primary store, secondary-store notification.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn, Span};
use uuid::Uuid;

use crate::error::{PenwrightError, Result};
use crate::persistence::{Repository, Stored};
use crate::pricing::CostCalculator;
use crate::provider::LanguageModelClient;

use super::config::SummaryConfig;
use super::notify::{SummaryNotification, SummaryNotifier};
use super::pipeline::SummaryPipeline;
use super::types::{SourceType, SummaryRequest};

/// Delivery state of a stored summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NotificationState {
    Pending,
    Delivered { at: DateTime<Utc> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub session_id: String,
    pub cost: Option<Decimal>,
    pub latency_seconds: f64,
}

/// Summary as written to the primary store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub entity_id: Uuid,
    pub source_type: SourceType,
    pub sources: Vec<Uuid>,
    pub summary: String,
    pub positive_tags: Vec<String>,
    pub negative_tags: Vec<String>,
    pub metadata: SummaryMetadata,
    pub notification: NotificationState,
}

impl SummaryRecord {
    fn notification_payload(&self) -> SummaryNotification {
        SummaryNotification {
            entity_id: self.entity_id,
            summary: self.summary.clone(),
            positive_tags: self.positive_tags.clone(),
            negative_tags: self.negative_tags.clone(),
        }
    }
}

/// Entry point for summary jobs.
///
/// Each job gets its own pipeline and usage tracker; the service itself
/// holds only shared, read-only collaborators.
pub struct SummaryService {
    client: Arc<dyn LanguageModelClient>,
    config: Arc<SummaryConfig>,
    calculator: CostCalculator,
    store: Arc<dyn Repository<SummaryRecord>>,
    notifier: Arc<dyn SummaryNotifier>,
}

impl SummaryService {
    pub fn new(
        client: Arc<dyn LanguageModelClient>,
        calculator: CostCalculator,
        store: Arc<dyn Repository<SummaryRecord>>,
        notifier: Arc<dyn SummaryNotifier>,
    ) -> Self {
        Self {
            client,
            config: Arc::new(SummaryConfig::default()),
            calculator,
            store,
            notifier,
        }
    }

    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Run a summary job and return the id of the stored summary.
    ///
    /// Returns `Ok(None)` when the pipeline produced an empty summary, in
    /// which case nothing is stored. The record is written before the
    /// notification; a failed notification leaves it stored as
    /// [`NotificationState::Failed`] and the error is returned.
    #[instrument(
        skip_all,
        fields(session_id = tracing::field::Empty, entity_id = %request.entity_id, sources = request.sources.len())
    )]
    pub async fn generate_summary(&self, request: &SummaryRequest) -> Result<Option<Uuid>> {
        let session_id = Uuid::new_v4().simple().to_string();
        Span::current().record("session_id", session_id.as_str());
        info!(entity_name = %request.entity_name, "starting summary generation");

        let pipeline = SummaryPipeline::new(
            Arc::clone(&self.client),
            Arc::clone(&self.config),
            self.calculator.clone(),
        );
        let result = pipeline.run(&request.entity_name, &request.reviews()).await?;

        if result.summary.trim().is_empty() {
            warn!("no summary generated");
            return Ok(None);
        }

        let record = SummaryRecord {
            entity_id: request.entity_id,
            source_type: request.source_type,
            sources: request.source_ids(),
            summary: result.summary,
            positive_tags: result.positive_tags,
            negative_tags: result.negative_tags,
            metadata: SummaryMetadata {
                session_id,
                cost: result.cost,
                latency_seconds: result.latency_seconds,
            },
            notification: NotificationState::Pending,
        };
        let stored = self.store.create(record).await.map_err(|err| {
            error!(error = %err, "failed to store summary");
            err
        })?;
        let summary_id = stored.id;
        info!(%summary_id, "summary stored");

        self.deliver(stored).await?;
        Ok(Some(summary_id))
    }

    /// Re-send a stored summary whose notification has not been delivered.
    /// Delivered records are returned untouched.
    #[instrument(skip(self))]
    pub async fn retry_notification(&self, id: Uuid) -> Result<Stored<SummaryRecord>> {
        let stored = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| PenwrightError::Persistence(format!("summary {id} not found")))?;

        if matches!(stored.data.notification, NotificationState::Delivered { .. }) {
            info!("summary already delivered");
            return Ok(stored);
        }
        self.deliver(stored).await
    }

    /// Notify the secondary store and record the outcome on the stored record.
    async fn deliver(&self, stored: Stored<SummaryRecord>) -> Result<Stored<SummaryRecord>> {
        let payload = stored.data.notification_payload();
        let outcome = self
            .notifier
            .notify(stored.data.source_type, &payload)
            .await;

        let mut record = stored.data;
        record.notification = match &outcome {
            Ok(()) => NotificationState::Delivered { at: Utc::now() },
            Err(err) => NotificationState::Failed {
                reason: err.to_string(),
            },
        };

        match outcome {
            Ok(()) => self.store.update(stored.id, record).await,
            Err(err) => {
                error!(summary_id = %stored.id, error = %err, "summary notification failed");
                if let Err(update_err) = self.store.update(stored.id, record).await {
                    warn!(summary_id = %stored.id, error = %update_err, "could not record failed notification");
                }
                Err(err)
            }
        }
    }
}
