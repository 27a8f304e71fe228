//! Shared test helpers: a scripted model client and a recording notifier.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;
use uuid::Uuid;

use penwright::error::{PenwrightError, Result};
use penwright::provider::{LanguageModelClient, ProviderRequest, ProviderResponse};
use penwright::summaries::{
    Source, SourceType, StageKind, SummaryConfig, SummaryNotification, SummaryNotifier,
    SummaryRequest,
};
use penwright::types::{Role, TokenUsage};

type Handler = dyn Fn(&ProviderRequest) -> Result<ProviderResponse> + Send + Sync;

/// A client that answers with a closure and records every request.
pub struct ScriptedClient {
    handler: Box<Handler>,
    requests: Mutex<Vec<ProviderRequest>>,
    gate: Option<(Vec<String>, Arc<Barrier>)>,
}

impl ScriptedClient {
    pub fn new(
        handler: impl Fn(&ProviderRequest) -> Result<ProviderResponse> + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Always reply with `text`, reporting `model` and the given token counts.
    pub fn fixed(text: &str, model: &str, input_tokens: u64, output_tokens: u64) -> Self {
        let text = text.to_string();
        let model = model.to_string();
        Self::new(move |_| Ok(response(&text, &model, input_tokens, output_tokens)))
    }

    /// Requests whose system message is one of `system_messages` wait on
    /// `barrier` before answering.
    pub fn with_gate(mut self, system_messages: Vec<String>, barrier: Arc<Barrier>) -> Self {
        self.gate = Some((system_messages, barrier));
        self
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Run the scripted handler directly, without recording or gating.
    pub fn reply_to(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        (self.handler)(request)
    }
}

#[async_trait]
impl LanguageModelClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn respond(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some((messages, barrier)) = &self.gate {
            if system_message(request).is_some_and(|m| messages.iter().any(|g| g == m)) {
                barrier.wait().await;
            }
        }
        (self.handler)(request)
    }
}

pub fn response(text: &str, model: &str, input_tokens: u64, output_tokens: u64) -> ProviderResponse {
    ProviderResponse {
        text: text.to_string(),
        usage: Some(TokenUsage::new(model, input_tokens, output_tokens)),
        model: model.to_string(),
    }
}

pub fn system_message(request: &ProviderRequest) -> Option<&str> {
    request
        .messages
        .iter()
        .find(|m| m.role == Role::System)
        .map(|m| m.content.as_str())
}

pub fn user_message(request: &ProviderRequest) -> Option<&str> {
    request
        .messages
        .iter()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
}

/// Which summary stage sent `request`, matched on its system message.
pub fn stage_of(config: &SummaryConfig, request: &ProviderRequest) -> Option<StageKind> {
    let system = system_message(request)?;
    [
        StageKind::Summarize,
        StageKind::Refine,
        StageKind::PositiveTags,
        StageKind::NegativeTags,
        StageKind::MergeTags,
    ]
    .into_iter()
    .find(|kind| config.stage(*kind).system_message == system)
}

/// Scripted reply for one summary stage.
#[derive(Debug, Clone)]
pub struct StageReply {
    pub text: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl StageReply {
    pub fn new(text: &str, model: &str, input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            text: text.to_string(),
            model: model.to_string(),
            input_tokens,
            output_tokens,
        }
    }

    pub fn usage(&self) -> TokenUsage {
        TokenUsage::new(&self.model, self.input_tokens, self.output_tokens)
    }
}

/// The replies of a well-behaved summary job.
pub fn happy_replies() -> HashMap<StageKind, StageReply> {
    HashMap::from([
        (
            StageKind::Summarize,
            StageReply::new("Draft: clean rooms, great pool.", "gpt-4.1-mini-2025-04-14", 1_200, 150),
        ),
        (
            StageKind::Refine,
            StageReply::new(
                "Guests praise the spotless rooms and the rooftop pool.",
                "gpt-4.1-2025-04-14",
                1_400,
                80,
            ),
        ),
        (
            StageKind::PositiveTags,
            StageReply::new(r#"{"tags":["pool","clean rooms"]}"#, "gpt-4.1-2025-04-14", 1_100, 20),
        ),
        (
            StageKind::NegativeTags,
            StageReply::new(r#"{"tags":["street noise"]}"#, "gpt-4.1-2025-04-14", 1_100, 15),
        ),
        (
            StageKind::MergeTags,
            StageReply::new(
                r#"{"positive_tags":["Pool","Clean rooms"],"negative_tags":["Street noise","pool"]}"#,
                "gpt-4.1-mini-2025-04-14",
                90,
                30,
            ),
        ),
    ])
}

/// A client that routes summary stages to `replies`. Stages missing from
/// `replies` fail with a 500.
pub fn summary_client(config: SummaryConfig, replies: HashMap<StageKind, StageReply>) -> ScriptedClient {
    ScriptedClient::new(move |request| {
        let kind = stage_of(&config, request)
            .ok_or_else(|| PenwrightError::InvalidRequest("unrecognized stage".into()))?;
        match replies.get(&kind) {
            Some(reply) => Ok(response(
                &reply.text,
                &reply.model,
                reply.input_tokens,
                reply.output_tokens,
            )),
            None => Err(PenwrightError::api(500, format!("{kind} unavailable"))),
        }
    })
}

pub fn summary_request(source_type: SourceType) -> SummaryRequest {
    SummaryRequest {
        entity_id: Uuid::new_v4(),
        entity_name: "Hotel Lumen".into(),
        source_type,
        sources: [
            "Spotless rooms and a lovely rooftop pool.",
            "Great pool, friendly staff, but the street is noisy at night.",
            "Clean, central, and the pool bar is fun.",
        ]
        .into_iter()
        .map(|review| Source {
            id: Uuid::new_v4(),
            review: review.to_string(),
        })
        .collect(),
    }
}

/// Notifier that records deliveries and fails the first `failures` calls.
#[derive(Default)]
pub struct RecordingNotifier {
    failures: AtomicUsize,
    calls: AtomicUsize,
    delivered: Mutex<Vec<(SourceType, SummaryNotification)>>,
}

impl RecordingNotifier {
    pub fn failing(failures: usize) -> Self {
        Self {
            failures: AtomicUsize::new(failures),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn delivered(&self) -> Vec<(SourceType, SummaryNotification)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryNotifier for RecordingNotifier {
    async fn notify(
        &self,
        source_type: SourceType,
        notification: &SummaryNotification,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(PenwrightError::notification(Some(503), "secondary store unavailable"));
        }
        self.delivered
            .lock()
            .unwrap()
            .push((source_type, notification.clone()));
        Ok(())
    }
}
