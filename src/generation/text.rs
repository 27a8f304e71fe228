//! Free-text calls.

use tracing::debug;

use crate::error::PenwrightError;
use crate::provider::{LanguageModelClient, ProviderRequest};
use crate::types::*;

/// Result of a free-text call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCompletion {
    pub text: String,
    pub usage: Option<TokenUsage>,
    /// Model id reported by the backend.
    pub model: String,
}

/// One call with top-level `instructions` and a single user `input`.
pub async fn call(
    client: &dyn LanguageModelClient,
    model: &str,
    instructions: &str,
    input: &str,
) -> Result<TextCompletion, PenwrightError> {
    let request =
        ProviderRequest::new(model, vec![ModelMessage::user(input)]).with_instructions(instructions);
    complete(client, request).await
}

/// One call over an explicit message list.
pub async fn parse_simple(
    client: &dyn LanguageModelClient,
    model: &str,
    messages: Vec<ModelMessage>,
) -> Result<TextCompletion, PenwrightError> {
    complete(client, ProviderRequest::new(model, messages)).await
}

async fn complete(
    client: &dyn LanguageModelClient,
    request: ProviderRequest,
) -> Result<TextCompletion, PenwrightError> {
    debug!(
        provider = client.provider_name(),
        model = %request.model,
        messages = request.messages.len(),
        "text call"
    );
    let response = client.respond(&request).await?;
    Ok(TextCompletion {
        text: response.text,
        usage: response.usage,
        model: response.model,
    })
}
