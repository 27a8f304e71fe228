//! OpenAI Responses API client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::PenwrightError;
use crate::types::*;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{LanguageModelClient, ProviderRequest, ProviderResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for `POST {base_url}/responses`.
#[derive(Debug, Clone)]
pub struct OpenAiResponsesClient {
    api_key: String,
    base_url: String,
}

impl OpenAiResponsesClient {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            api_key: api_key.into(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body(request: &ProviderRequest) -> Value {
        let input: Vec<Value> = request
            .messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        let mut body = Map::new();
        body.insert("model".into(), request.model.clone().into());
        body.insert("input".into(), input.into());
        if let Some(ref instructions) = request.instructions {
            body.insert("instructions".into(), instructions.clone().into());
        }
        if let Some(ResponseFormat::JsonSchema { schema, name }) = &request.response_format {
            body.insert(
                "text".into(),
                json!({
                    "format": {
                        "type": "json_schema",
                        "name": name,
                        "schema": schema,
                        "strict": true,
                    }
                }),
            );
        }
        Value::Object(body)
    }

    fn parse_response(
        data: ResponsesApiResponse,
        requested_model: &str,
    ) -> Result<ProviderResponse, PenwrightError> {
        let outputs = data
            .output
            .ok_or_else(|| PenwrightError::api(200, "No output in OpenAI response"))?;

        let mut text = String::new();
        for output in outputs.into_iter().filter(|o| o.r#type == "message") {
            for chunk in output.content.unwrap_or_default() {
                if chunk.r#type == "output_text" {
                    if let Some(segment) = chunk.text {
                        text.push_str(&segment);
                    }
                }
            }
        }

        let model = data
            .model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| requested_model.to_string());
        let usage = Self::map_usage(data.usage, &model);

        Ok(ProviderResponse { text, usage, model })
    }

    fn map_usage(usage: Option<ResponsesUsage>, model: &str) -> Option<TokenUsage> {
        let u = usage?;
        let input_tokens = u.input_tokens.unwrap_or(0);
        let output_tokens = u.output_tokens.unwrap_or(0);
        Some(TokenUsage {
            input_tokens,
            output_tokens,
            total_tokens: u.total_tokens.unwrap_or(input_tokens + output_tokens),
            model: model.to_string(),
            input_tokens_details: u.input_tokens_details,
            output_tokens_details: u.output_tokens_details,
        })
    }
}

#[async_trait]
impl LanguageModelClient for OpenAiResponsesClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn respond(&self, request: &ProviderRequest) -> Result<ProviderResponse, PenwrightError> {
        let body = Self::build_request_body(request);
        let url = format!("{}/responses", self.base_url);

        debug!(model = %request.model, "OpenAI Responses respond");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: ResponsesApiResponse = resp.json().await?;
        Self::parse_response(data, &request.model)
    }
}

// Wire types for the Responses API

#[derive(Deserialize)]
struct ResponsesApiResponse {
    #[serde(default)]
    model: Option<String>,
    output: Option<Vec<ResponsesOutputItem>>,
    usage: Option<ResponsesUsage>,
}

#[derive(Deserialize)]
struct ResponsesOutputItem {
    r#type: String,
    #[serde(default)]
    content: Option<Vec<ResponsesOutputContent>>,
}

#[derive(Deserialize)]
struct ResponsesOutputContent {
    r#type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ResponsesUsage {
    #[serde(default)]
    input_tokens: Option<u64>,
    #[serde(default)]
    output_tokens: Option<u64>,
    #[serde(default)]
    total_tokens: Option<u64>,
    #[serde(default)]
    input_tokens_details: Option<InputTokensDetails>,
    #[serde(default)]
    output_tokens_details: Option<OutputTokensDetails>,
}
