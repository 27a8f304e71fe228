//! Language-model client trait and the OpenAI Responses implementation.

pub mod http;
pub mod openai_responses;

use async_trait::async_trait;

use crate::error::PenwrightError;
use crate::types::{ModelMessage, ResponseFormat, TokenUsage};

pub use openai_responses::OpenAiResponsesClient;

/// A request sent to a model backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub model: String,
    /// Top-level instructions, sent separately from the input messages.
    pub instructions: Option<String>,
    pub messages: Vec<ModelMessage>,
    pub response_format: Option<ResponseFormat>,
}

impl ProviderRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ModelMessage>) -> Self {
        Self {
            model: model.into(),
            instructions: None,
            messages,
            response_format: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Response from a model backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    /// Usage as reported by the backend, tagged with the model that served it.
    /// `None` when the backend reported no usage; such a call cannot be priced.
    pub usage: Option<TokenUsage>,
    /// Model id reported by the backend (often a dated snapshot).
    pub model: String,
}

/// Core trait implemented by every model backend.
#[async_trait]
pub trait LanguageModelClient: Send + Sync {
    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// Issue one non-streaming completion.
    async fn respond(&self, request: &ProviderRequest) -> Result<ProviderResponse, PenwrightError>;
}
