use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use penwright::error::PenwrightError;
use penwright::generation::{self, StructuredOutput};
use penwright::provider::{LanguageModelClient, OpenAiResponsesClient};
use penwright::summaries::Tags;
use penwright::types::ModelMessage;

fn responses_body(model: &str, text: &str) -> Value {
    json!({
        "id": "resp_1",
        "object": "response",
        "model": model,
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": text, "annotations": []}]
        }],
        "usage": {
            "input_tokens": 1200,
            "input_tokens_details": {"cached_tokens": 1024},
            "output_tokens": 40,
            "output_tokens_details": {"reasoning_tokens": 0},
            "total_tokens": 1240
        }
    })
}

#[tokio::test]
async fn call_sends_instructions_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4.1-mini",
            "instructions": "Write copy.",
            "input": [{"role": "user", "content": "Kyoto, two nights"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(responses_body("gpt-4.1-mini-2025-04-14", "Lanterns glow in Gion.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-test", Some(server.uri()));
    let completion = generation::call(&client, "gpt-4.1-mini", "Write copy.", "Kyoto, two nights")
        .await
        .unwrap();

    assert_eq!(completion.text, "Lanterns glow in Gion.");
    assert_eq!(completion.model, "gpt-4.1-mini-2025-04-14");
    let usage = completion.usage.unwrap();
    assert_eq!(usage.model, "gpt-4.1-mini-2025-04-14");
    assert_eq!(usage.input_tokens, 1200);
    assert_eq!(usage.cached_tokens(), 1024);
}

#[tokio::test]
async fn structured_call_requests_a_strict_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(body_partial_json(json!({
            "input": [
                {"role": "system", "content": "Extract tags."},
                {"role": "user", "content": "reviews"}
            ],
            "text": {"format": {"type": "json_schema", "name": "Tags", "strict": true}}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(responses_body("gpt-4.1", r#"{"tags":["pool","breakfast"]}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-test", Some(format!("{}/", server.uri())));
    let completion = generation::call_structured::<Tags>(&client, "gpt-4.1", "Extract tags.", "reviews")
        .await
        .unwrap();

    assert_eq!(completion.object.tags, vec!["pool", "breakfast"]);
    assert_eq!(Tags::NAME, "Tags");
}

#[tokio::test]
async fn missing_model_in_reply_falls_back_to_the_requested_one() {
    let server = MockServer::start().await;
    let mut body = responses_body("ignored", "ok");
    body.as_object_mut().unwrap().remove("model");
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-test", Some(server.uri()));
    let completion = generation::parse_simple(&client, "gpt-4o", vec![ModelMessage::user("hi")])
        .await
        .unwrap();
    assert_eq!(completion.model, "gpt-4o");
    assert_eq!(completion.usage.unwrap().model, "gpt-4o");
}

#[tokio::test]
async fn reply_without_usage_reports_none() {
    let server = MockServer::start().await;
    let mut body = responses_body("gpt-4.1-mini-2025-04-14", "ok");
    body.as_object_mut().unwrap().remove("usage");
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-test", Some(server.uri()));
    let completion = generation::call(&client, "gpt-4.1-mini", "x", "y").await.unwrap();
    assert_eq!(completion.text, "ok");
    assert_eq!(completion.usage, None);
}

#[tokio::test]
async fn unauthorized_maps_to_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-bad", Some(server.uri()));
    let err = generation::call(&client, "gpt-4.1", "x", "y").await.unwrap_err();
    assert!(matches!(err, PenwrightError::Authentication(_)));
    assert!(err.is_llm_call_failure());
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": {"retry_after": 2}})),
        )
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-test", Some(server.uri()));
    let err = generation::call(&client, "gpt-4.1", "x", "y").await.unwrap_err();
    assert!(matches!(
        err,
        PenwrightError::RateLimited {
            retry_after_ms: Some(2000)
        }
    ));
}

#[tokio::test]
async fn server_error_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = OpenAiResponsesClient::new("sk-test", Some(server.uri()));
    let err = generation::call(&client, "gpt-4.1", "x", "y").await.unwrap_err();
    assert!(matches!(err, PenwrightError::Api { status: 503, .. }));
}

#[test]
fn default_base_url_and_provider_name() {
    let client = OpenAiResponsesClient::new("sk-test", None);
    assert_eq!(client.base_url(), "https://api.openai.com/v1");
    assert_eq!(client.provider_name(), "openai");
}
