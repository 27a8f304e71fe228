//! Single-call content generator.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, instrument, warn};

use crate::error::{PenwrightError, Result};
use crate::generation;
use crate::pricing::CostCalculator;
use crate::prompts::PromptCompiler;
use crate::provider::LanguageModelClient;
use crate::types::TokenUsage;
use crate::util::{preview, UsageTracker, INPUT_PREVIEW_BYTES, OUTPUT_PREVIEW_BYTES};

use super::request::ContentEnrichmentRequest;

pub const DEFAULT_CONTENT_MODEL: &str = "gpt-4.1-mini";

/// Output of one content-enrichment call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub text: String,
    /// Model reported by the backend.
    pub model: String,
    /// `None` when the call could not be priced.
    pub cost: Option<Decimal>,
    pub usage: Option<TokenUsage>,
}

/// Compiles the prompt, makes exactly one model call, then prices it.
pub struct ContentGenerator {
    client: Arc<dyn LanguageModelClient>,
    compiler: PromptCompiler,
    calculator: CostCalculator,
    model: String,
}

impl ContentGenerator {
    pub fn new(client: Arc<dyn LanguageModelClient>, calculator: CostCalculator) -> Self {
        Self {
            client,
            compiler: PromptCompiler::default(),
            calculator,
            model: DEFAULT_CONTENT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_compiler(mut self, compiler: PromptCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for `request`.
    ///
    /// Fails with `InvalidRequest` if the request does not select exactly
    /// one function; model failures propagate unchanged. A pricing failure
    /// only degrades `cost` to `None`.
    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn generate(&self, request: &ContentEnrichmentRequest) -> Result<GeneratedContent> {
        let data = request.function_data()?;

        let instructions = self.compiler.compile_instructions(
            data.function,
            data.has_existing_text(),
            data.tone,
            request.output_format,
        );
        let prompt =
            self.compiler
                .compile_prompt(data.function, data.existing_text, data.user_instructions);

        debug!(
            function = %data.function,
            prompt = %preview(&prompt, INPUT_PREVIEW_BYTES),
            "calling model"
        );

        let completion = generation::call(self.client.as_ref(), &self.model, &instructions, &prompt)
            .await
            .map_err(|err| {
                error!(function = %data.function, error = %err, "content generation failed");
                err
            })?;

        let tracker = UsageTracker::new(self.calculator.clone());
        let priced = completion
            .usage
            .as_ref()
            .ok_or_else(|| PenwrightError::UsageMissing(completion.model.clone()))
            .and_then(|usage| tracker.track_usage(usage));
        let cost = match priced {
            Ok(cost) => Some(cost),
            Err(err) => {
                warn!(
                    model = %completion.model,
                    error = %err,
                    "cost calculation failed; storing without cost"
                );
                None
            }
        };

        debug!(
            response = %preview(&completion.text, OUTPUT_PREVIEW_BYTES),
            cost = ?cost,
            "content generated"
        );

        Ok(GeneratedContent {
            text: completion.text,
            model: completion.model,
            cost,
            usage: completion.usage,
        })
    }
}
