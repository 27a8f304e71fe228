//! Structured output: typed objects from schema-constrained calls.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PenwrightError;
use crate::provider::{LanguageModelClient, ProviderRequest};
use crate::types::*;

/// A type the model can be asked to produce as strict JSON.
pub trait StructuredOutput: DeserializeOwned + Send {
    /// Schema name sent with the request.
    const NAME: &'static str;

    /// JSON Schema for the type. Must be strict-mode compatible
    /// (`additionalProperties: false`, every property required).
    fn schema() -> Value;
}

/// Result of a structured call.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCompletion<T> {
    pub object: T,
    pub raw_text: String,
    pub usage: Option<TokenUsage>,
    pub model: String,
}

/// Issue one structured-output call and parse the reply into `T`.
///
/// A reply that does not parse is a provider failure
/// ([`PenwrightError::Serialization`]).
pub async fn call_structured<T: StructuredOutput>(
    client: &dyn LanguageModelClient,
    model: &str,
    system_message: &str,
    user_message: &str,
) -> Result<ObjectCompletion<T>, PenwrightError> {
    let request = ProviderRequest::new(
        model,
        vec![
            ModelMessage::system(system_message),
            ModelMessage::user(user_message),
        ],
    )
    .with_response_format(ResponseFormat::JsonSchema {
        schema: T::schema(),
        name: T::NAME.to_string(),
    });

    let response = client.respond(&request).await?;

    let raw_text = response.text.trim().to_string();
    let object: T = serde_json::from_str(&strip_code_fences(&raw_text))?;

    Ok(ObjectCompletion {
        object,
        raw_text,
        usage: response.usage,
        model: response.model,
    })
}

/// Strip markdown code fences from a JSON reply.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        let without_opening = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .unwrap_or(trimmed);
        if let Some(stripped) = without_opening.strip_suffix("```") {
            return stripped.trim().to_string();
        }
        return without_opening.trim().to_string();
    }
    trimmed.to_string()
}
