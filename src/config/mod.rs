//! Configuration loaded from the environment (and `.env`).

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::content::DEFAULT_CONTENT_MODEL;
use crate::error::{PenwrightError, Result};
use crate::pricing::{CostCalculator, PricingTable};
use crate::provider::OpenAiResponsesClient;
use crate::summaries::{HttpNotifier, DEFAULT_NOTIFY_TIMEOUT};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const CONTENT_MODEL: &str = "PENWRIGHT_CONTENT_MODEL";
pub const PRICING_FILE: &str = "PENWRIGHT_PRICING_FILE";
pub const RESTRICTED_BASE_URL: &str = "RESTRICTED_BASE_URL";
pub const PORTAL_BE_API_KEY: &str = "PORTAL_BE_API_KEY";
pub const NOTIFY_TIMEOUT_SECS: &str = "PENWRIGHT_NOTIFY_TIMEOUT_SECS";

/// Process configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct PenwrightConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub content_model: String,
    /// TOML file replacing the built-in pricing table.
    pub pricing_file: Option<PathBuf>,
    /// Base URL of the secondary store.
    pub restricted_base_url: Option<String>,
    /// Shared secret for the secondary store.
    pub portal_api_key: Option<String>,
    pub notify_timeout: Duration,
}

impl fmt::Debug for PenwrightConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("PenwrightConfig")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("openai_base_url", &self.openai_base_url)
            .field("content_model", &self.content_model)
            .field("pricing_file", &self.pricing_file)
            .field("restricted_base_url", &self.restricted_base_url)
            .field("portal_api_key", &redact(&self.portal_api_key))
            .field("notify_timeout", &self.notify_timeout)
            .finish()
    }
}

impl Default for PenwrightConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: None,
            content_model: DEFAULT_CONTENT_MODEL.to_string(),
            pricing_file: None,
            restricted_base_url: None,
            portal_api_key: None,
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }
}

impl PenwrightConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let notify_timeout = match get(NOTIFY_TIMEOUT_SECS) {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                PenwrightError::Configuration(format!(
                    "{NOTIFY_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?),
            None => DEFAULT_NOTIFY_TIMEOUT,
        };

        Ok(Self {
            openai_api_key: get(OPENAI_API_KEY),
            openai_base_url: get(OPENAI_BASE_URL),
            content_model: get(CONTENT_MODEL).unwrap_or_else(|| DEFAULT_CONTENT_MODEL.to_string()),
            pricing_file: get(PRICING_FILE).map(PathBuf::from),
            restricted_base_url: get(RESTRICTED_BASE_URL),
            portal_api_key: get(PORTAL_BE_API_KEY),
            notify_timeout,
        })
    }

    /// Check settings every flow needs.
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.is_none() {
            return Err(PenwrightError::Configuration(format!(
                "{OPENAI_API_KEY} is not set"
            )));
        }
        Ok(())
    }

    /// The configured pricing file, or the built-in table.
    pub fn pricing_table(&self) -> Result<Arc<PricingTable>> {
        match &self.pricing_file {
            Some(path) => Ok(Arc::new(PricingTable::from_path(path)?)),
            None => Ok(PricingTable::shared()),
        }
    }

    pub fn cost_calculator(&self) -> Result<CostCalculator> {
        Ok(CostCalculator::new(self.pricing_table()?))
    }

    pub fn openai_client(&self) -> Result<OpenAiResponsesClient> {
        let api_key = self
            .openai_api_key
            .clone()
            .ok_or_else(|| PenwrightError::Authentication(format!("Missing {OPENAI_API_KEY}")))?;
        Ok(OpenAiResponsesClient::new(
            api_key,
            self.openai_base_url.clone(),
        ))
    }

    pub fn notifier(&self) -> Result<HttpNotifier> {
        let base_url = self.restricted_base_url.clone().ok_or_else(|| {
            PenwrightError::Configuration(format!("{RESTRICTED_BASE_URL} is not set"))
        })?;
        let api_key = self.portal_api_key.clone().ok_or_else(|| {
            PenwrightError::Configuration(format!("{PORTAL_BE_API_KEY} is not set"))
        })?;
        Ok(HttpNotifier::new(base_url, api_key).with_timeout(self.notify_timeout))
    }
}
