//! Error types for Penwright.

pub mod unified;

pub use unified::{ErrorCategory, ErrorCode};

use thiserror::Error;

/// Primary error type for all Penwright operations.
#[derive(Error, Debug)]
pub enum PenwrightError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("No usage reported for {0}")]
    UsageMissing(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported source type: {0}")]
    UnsupportedSourceType(String),

    #[error("Notification failed (status {status:?}): {message}")]
    Notification {
        status: Option<u16>,
        message: String,
    },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PenwrightError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a notification error carrying the HTTP status, if any.
    pub fn notification(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Notification {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownModel(_) | Self::UsageMissing(_) => ErrorCategory::Pricing,
            Self::InvalidRequest(_) => ErrorCategory::InvalidRequest,
            Self::Api { .. }
            | Self::Network(_)
            | Self::Authentication(_)
            | Self::RateLimited { .. }
            | Self::Serialization(_) => ErrorCategory::LlmCall,
            Self::UnsupportedSourceType(_) | Self::Notification { .. } => {
                ErrorCategory::Notification
            }
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Persistence(_) => ErrorCategory::Persistence,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }

    /// Machine-readable code for the API boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownModel(_) => ErrorCode::UnknownModel,
            Self::UsageMissing(_) => ErrorCode::UsageMissing,
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::Authentication(_) => ErrorCode::InvalidApiKey,
            Self::RateLimited { .. } => ErrorCode::RateLimitExceeded,
            Self::Api { status, .. } if *status >= 500 => ErrorCode::ProviderUnavailable,
            Self::Api { .. } | Self::Network(_) | Self::Serialization(_) => {
                ErrorCode::LlmCallFailed
            }
            Self::UnsupportedSourceType(_) => ErrorCode::UnsupportedSourceType,
            Self::Notification { .. } => ErrorCode::NotificationFailed,
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::Persistence(_) => ErrorCode::PersistenceFailed,
            Self::Configuration(_) | Self::Io(_) => ErrorCode::Internal,
        }
    }

    /// Whether this error came from the remote model provider.
    pub fn is_llm_call_failure(&self) -> bool {
        self.category() == ErrorCategory::LlmCall
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PenwrightError>;
