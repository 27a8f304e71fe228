mod common;

use std::str::FromStr;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use common::{response, ScriptedClient};
use penwright::content::{
    ContentEnrichmentRequest, ContentGenerator, ContentRecord, ContentService, GenerateContext,
    RewriteContext, DEFAULT_CONTENT_MODEL,
};
use penwright::error::PenwrightError;
use penwright::persistence::{MemoryRepository, Repository};
use penwright::pricing::CostCalculator;
use penwright::prompts::{Function, OutputFormat, PromptCompiler, Tone};
use penwright::types::Role;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn generate_request(instructions: &str) -> ContentEnrichmentRequest {
    ContentEnrichmentRequest::generate(
        GenerateContext {
            user_instructions: instructions.into(),
            ..Default::default()
        },
        OutputFormat::Text,
    )
}

fn generator(client: Arc<ScriptedClient>) -> ContentGenerator {
    ContentGenerator::new(client, CostCalculator::default())
}

#[tokio::test]
async fn generate_makes_one_call_and_prices_it() {
    let client = Arc::new(ScriptedClient::fixed(
        "Day one opens in Gion.",
        "gpt-4.1-mini-2025-04-14",
        1_000_000,
        1_000,
    ));
    let content = generator(client.clone())
        .generate(&generate_request("Two nights in Kyoto"))
        .await
        .unwrap();

    assert_eq!(content.text, "Day one opens in Gion.");
    assert_eq!(content.model, "gpt-4.1-mini-2025-04-14");
    assert_eq!(content.cost, Some(dec("0.4016")));

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, DEFAULT_CONTENT_MODEL);
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(requests[0].messages[0].role, Role::User);
    assert!(requests[0].messages[0].content.contains("Two nights in Kyoto"));
}

#[tokio::test]
async fn instructions_are_sent_separately_from_the_prompt() {
    let client = Arc::new(ScriptedClient::fixed("Arr.", "gpt-4.1-mini", 10, 5));
    let request = ContentEnrichmentRequest::rewrite(
        Function::ChangeMyTone,
        RewriteContext {
            existing_text: "Welcome aboard the river cruise.".into(),
            tone: Some(Tone::Pirate),
            ..Default::default()
        },
        OutputFormat::Html,
    );
    generator(client.clone()).generate(&request).await.unwrap();

    let compiler = PromptCompiler::default();
    let sent = &client.requests()[0];
    assert_eq!(
        sent.instructions.as_deref(),
        Some(
            compiler
                .compile_instructions(Function::ChangeMyTone, true, Some(Tone::Pirate), OutputFormat::Html)
                .as_str()
        )
    );
    assert_eq!(
        sent.messages[0].content,
        compiler.compile_prompt(Function::ChangeMyTone, Some("Welcome aboard the river cruise."), None)
    );
}

#[tokio::test]
async fn model_override_is_used_for_the_call() {
    let client = Arc::new(ScriptedClient::fixed("ok", "gpt-4o", 1, 1));
    let generator = generator(client.clone()).with_model("gpt-4o");
    generator.generate(&generate_request("x")).await.unwrap();
    assert_eq!(client.requests()[0].model, "gpt-4o");
}

#[tokio::test]
async fn unpriced_model_keeps_the_text_and_drops_the_cost() {
    let client = Arc::new(ScriptedClient::fixed("Fine text.", "house-model-7", 100, 100));
    let content = generator(client)
        .generate(&generate_request("Beach week"))
        .await
        .unwrap();
    assert_eq!(content.text, "Fine text.");
    assert_eq!(content.cost, None);
}

#[tokio::test]
async fn missing_usage_leaves_the_cost_unknown() {
    let client = Arc::new(ScriptedClient::new(|_| {
        let mut reply = response("Harbour lights.", "gpt-4.1-mini-2025-04-14", 0, 0);
        reply.usage = None;
        Ok(reply)
    }));
    let content = generator(client)
        .generate(&generate_request("Lisbon weekend"))
        .await
        .unwrap();
    assert_eq!(content.text, "Harbour lights.");
    assert_eq!(content.usage, None);
    assert_eq!(content.cost, None);
}

#[tokio::test]
async fn model_failure_propagates() {
    let client = Arc::new(ScriptedClient::new(|_| {
        Err(PenwrightError::api(502, "bad gateway"))
    }));
    let err = generator(client)
        .generate(&generate_request("Beach week"))
        .await
        .unwrap_err();
    assert!(err.is_llm_call_failure());
    assert!(matches!(err, PenwrightError::Api { status: 502, .. }));
}

#[tokio::test]
async fn request_without_a_function_is_rejected_before_calling() {
    let client = Arc::new(ScriptedClient::fixed("unused", "gpt-4.1-mini", 1, 1));
    let err = generator(client.clone())
        .generate(&ContentEnrichmentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PenwrightError::InvalidRequest(_)));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn service_stores_the_result_with_rounded_cost() {
    let client = Arc::new(ScriptedClient::new(|_| {
        Ok(response("Shorter.", "gpt-4.1-2025-04-14", 1_234, 567))
    }));
    let store = Arc::new(MemoryRepository::<ContentRecord>::new());
    let service = ContentService::new(generator(client), store.clone());

    let request = ContentEnrichmentRequest::rewrite(
        Function::Shorten,
        RewriteContext {
            existing_text: "A long, long description of the lodge.".into(),
            user_instructions: Some("one sentence".into()),
            tone: None,
        },
        OutputFormat::Text,
    )
    .with_metadata("block_id", json!("blk-42"));

    let outcome = service.generate_content(&request).await.unwrap();
    // 1234 * 2/M + 567 * 8/M
    assert_eq!(outcome.content.cost, Some(dec("0.007004")));

    let stored = store.get(outcome.id).await.unwrap().unwrap();
    let record = stored.data;
    assert_eq!(store.len(), 1);
    assert_eq!(record.function, Function::Shorten);
    assert_eq!(record.ai_response, "Shorter.");
    assert_eq!(record.ai_model.as_deref(), Some("gpt-4.1-2025-04-14"));
    assert_eq!(record.cost_usd, Some(dec("0.0070")));
    assert_eq!(record.user_instructions.as_deref(), Some("one sentence"));
    assert_eq!(record.metadata["block_id"], "blk-42");
    assert!(record.latency_ms.is_some());
    assert!(record.accepted_at.is_none());
    assert!(!record.failed);
}

#[tokio::test]
async fn service_validates_before_generating() {
    let client = Arc::new(ScriptedClient::fixed("unused", "gpt-4.1-mini", 1, 1));
    let store = Arc::new(MemoryRepository::<ContentRecord>::new());
    let service = ContentService::new(generator(client.clone()), store.clone());

    let request = ContentEnrichmentRequest::rewrite(
        Function::ChangeMyTone,
        RewriteContext {
            existing_text: "Some text".into(),
            ..Default::default()
        },
        OutputFormat::Text,
    );
    let err = service.generate_content(&request).await.unwrap_err();
    assert!(matches!(err, PenwrightError::InvalidRequest(_)));
    assert_eq!(client.call_count(), 0);
    assert!(store.is_empty());
}

#[tokio::test]
async fn failed_generation_stores_nothing() {
    let client = Arc::new(ScriptedClient::new(|_| {
        Err(PenwrightError::RateLimited {
            retry_after_ms: Some(500),
        })
    }));
    let store = Arc::new(MemoryRepository::<ContentRecord>::new());
    let service = ContentService::new(generator(client), store.clone());

    let err = service
        .generate_content(&generate_request("Alpine lodge"))
        .await
        .unwrap_err();
    assert!(matches!(err, PenwrightError::RateLimited { .. }));
    assert!(store.is_empty());
}

#[tokio::test]
async fn accept_marks_the_record() {
    let client = Arc::new(ScriptedClient::fixed("Text.", "gpt-4.1-mini", 1, 1));
    let store = Arc::new(MemoryRepository::<ContentRecord>::new());
    let service = ContentService::new(generator(client), store.clone());

    let outcome = service
        .generate_content(&generate_request("Safari"))
        .await
        .unwrap();
    let accepted = service.accept(outcome.id).await.unwrap();
    assert!(accepted.data.accepted_at.is_some());

    let err = service.accept(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, PenwrightError::Persistence(_)));
}
