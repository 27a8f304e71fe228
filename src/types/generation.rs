//! Output format requested from the provider.

use serde::{Deserialize, Serialize};

/// Requested response format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Text,
    JsonSchema {
        schema: serde_json::Value,
        name: String,
    },
}
