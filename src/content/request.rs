//! Content-enrichment request shape and validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PenwrightError, Result};
use crate::prompts::{Function, OutputFormat, Tone};

/// Context for `generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContext {
    pub user_instructions: String,
    #[serde(default)]
    pub existing_text: Option<String>,
    #[serde(default)]
    pub tone: Option<Tone>,
}

/// Context for the rewrite functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteContext {
    pub existing_text: String,
    #[serde(default)]
    pub user_instructions: Option<String>,
    #[serde(default)]
    pub tone: Option<Tone>,
}

/// One content-enrichment request. Exactly one function field is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEnrichmentRequest {
    /// Caller metadata (e.g. the block id), stored as-is.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub output_format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate: Option<GenerateContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elaborate: Option<RewriteContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polish: Option<RewriteContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorten: Option<RewriteContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_my_tone: Option<RewriteContext>,
}

/// The selected function and a borrowed view of its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionData<'a> {
    pub function: Function,
    pub existing_text: Option<&'a str>,
    pub user_instructions: Option<&'a str>,
    pub tone: Option<Tone>,
}

impl FunctionData<'_> {
    /// Whether non-empty existing text was supplied.
    pub fn has_existing_text(&self) -> bool {
        self.existing_text.is_some_and(|t| !t.is_empty())
    }
}

impl ContentEnrichmentRequest {
    pub fn generate(context: GenerateContext, output_format: OutputFormat) -> Self {
        Self {
            output_format,
            generate: Some(context),
            ..Self::default()
        }
    }

    /// Request for one of the rewrite functions.
    pub fn rewrite(function: Function, context: RewriteContext, output_format: OutputFormat) -> Self {
        let mut request = Self {
            output_format,
            ..Self::default()
        };
        match function {
            Function::Generate => {
                request.generate = Some(GenerateContext {
                    user_instructions: context.user_instructions.unwrap_or_default(),
                    existing_text: Some(context.existing_text),
                    tone: context.tone,
                })
            }
            Function::Elaborate => request.elaborate = Some(context),
            Function::Polish => request.polish = Some(context),
            Function::Shorten => request.shorten = Some(context),
            Function::ChangeMyTone => request.change_my_tone = Some(context),
        }
        request
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The single selected function and its context.
    ///
    /// Fails with [`PenwrightError::InvalidRequest`] unless exactly one
    /// function field is present.
    pub fn function_data(&self) -> Result<FunctionData<'_>> {
        let mut selected = Vec::with_capacity(1);
        if let Some(ctx) = &self.generate {
            selected.push(FunctionData {
                function: Function::Generate,
                existing_text: ctx.existing_text.as_deref(),
                user_instructions: Some(ctx.user_instructions.as_str()),
                tone: ctx.tone,
            });
        }
        for (function, ctx) in [
            (Function::Elaborate, &self.elaborate),
            (Function::Polish, &self.polish),
            (Function::Shorten, &self.shorten),
            (Function::ChangeMyTone, &self.change_my_tone),
        ] {
            if let Some(ctx) = ctx {
                selected.push(FunctionData {
                    function,
                    existing_text: Some(ctx.existing_text.as_str()),
                    user_instructions: ctx.user_instructions.as_deref(),
                    tone: ctx.tone,
                });
            }
        }

        match selected.as_slice() {
            [data] => Ok(*data),
            _ => Err(PenwrightError::InvalidRequest(format!(
                "request must have exactly one function key from [generate, elaborate, polish, shorten, change_my_tone], found {}",
                selected.len()
            ))),
        }
    }

    /// Full request validation, as the API boundary performs it.
    pub fn validate(&self) -> Result<()> {
        let data = self.function_data()?;
        match data.function {
            Function::Generate => {
                if data.user_instructions.map_or(true, str::is_empty) {
                    return Err(PenwrightError::InvalidRequest(
                        "generate function requires user_instructions".into(),
                    ));
                }
            }
            function => {
                if !data.has_existing_text() {
                    return Err(PenwrightError::InvalidRequest(format!(
                        "{function} function requires existing_text"
                    )));
                }
                if function == Function::ChangeMyTone && data.tone.is_none() {
                    return Err(PenwrightError::InvalidRequest(
                        "change_my_tone function requires tone field".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}
