//! Error classification shared with the API boundary.

use serde::{Deserialize, Serialize};

/// Machine-readable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownModel,
    UsageMissing,
    InvalidRequest,
    InvalidApiKey,
    RateLimitExceeded,
    ProviderUnavailable,
    LlmCallFailed,
    UnsupportedSourceType,
    NotificationFailed,
    PersistenceFailed,
    Timeout,
    Internal,
}

/// Broad error category, one per failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Pricing,
    InvalidRequest,
    LlmCall,
    Notification,
    Configuration,
    Persistence,
    Timeout,
    Unknown,
}
