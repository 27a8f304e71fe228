//! Delivery of finished summaries to the secondary store.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{PenwrightError, Result};
use crate::provider::http::{shared_client, shared_secret_headers};
use crate::util::with_timeout;

use super::types::SourceType;

pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(30);

/// Body posted to the secondary store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryNotification {
    #[serde(rename = "supplier_id")]
    pub entity_id: Uuid,
    pub summary: String,
    pub positive_tags: Vec<String>,
    pub negative_tags: Vec<String>,
}

/// Outbound notification seam.
#[async_trait]
pub trait SummaryNotifier: Send + Sync {
    /// Deliver `notification`. Non-success responses and timeouts are
    /// [`PenwrightError::Notification`] errors.
    async fn notify(&self, source_type: SourceType, notification: &SummaryNotification)
        -> Result<()>;
}

/// Posts summaries to the secondary store over HTTP.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl HttpNotifier {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Endpoint for one entity. Only client supplier reviews have a route.
    pub fn endpoint(&self, entity_id: Uuid, source_type: SourceType) -> Result<String> {
        match source_type {
            SourceType::ClientSupplierReviews => Ok(format!(
                "{}/v1/suppliers/{entity_id}/client-reviews/summary/",
                self.base_url
            )),
            other => Err(PenwrightError::UnsupportedSourceType(format!(
                "{other} is not a valid source type"
            ))),
        }
    }
}

#[async_trait]
impl SummaryNotifier for HttpNotifier {
    async fn notify(
        &self,
        source_type: SourceType,
        notification: &SummaryNotification,
    ) -> Result<()> {
        let url = self.endpoint(notification.entity_id, source_type)?;
        debug!(%url, "posting summary");

        let send = async {
            let resp = shared_client()
                .post(&url)
                .headers(shared_secret_headers(&self.api_key))
                .json(notification)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(PenwrightError::notification(Some(status.as_u16()), body));
            }
            Ok::<_, PenwrightError>(status.as_u16())
        };

        let status = with_timeout(self.timeout, send).await.map_err(|err| match err {
            PenwrightError::Timeout(ms) => {
                PenwrightError::notification(None, format!("timed out after {ms}ms"))
            }
            PenwrightError::Network(e) => PenwrightError::notification(None, e.to_string()),
            other => other,
        })?;

        info!(entity_id = %notification.entity_id, status, "summary delivered");
        Ok(())
    }
}
