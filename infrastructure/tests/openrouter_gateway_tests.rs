//! OpenRouterGateway against a stub HTTP backend.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use vakyalok_application::{
    CompletionGateway, DraftDocumentUseCase, DraftRequest, GatewayError, SendOptions,
};
use vakyalok_domain::{Conversation, DocumentKind, FailureKind, GenerationParams, Language, Model};
use vakyalok_infrastructure::{GatewayConfig, OpenRouterGateway};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

fn gateway_for(server: &MockServer) -> OpenRouterGateway {
    OpenRouterGateway::new(
        GatewayConfig::new("sk-test").with_base_url(format!("{}/api/v1", server.uri())),
    )
    .unwrap()
}

fn reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "gen-1",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
}

fn legal_question() -> Conversation {
    Conversation::with_system_prompt("You are a legal assistant").user("What is an FIR?")
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_fir_question() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_json(json!({
            "model": "mistralai/mistral-7b-instruct",
            "messages": [
                {"role": "system", "content": "You are a legal assistant"},
                {"role": "user", "content": "What is an FIR?"}
            ],
            "max_tokens": 1000,
            "temperature": 0.7,
            "stream": false
        })))
        .respond_with(reply("An FIR is..."))
        .expect(1)
        .mount(&server)
        .await;

    let completion = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap();

    assert_eq!(completion.text, "An FIR is...");
    assert_eq!(completion.model, Model::Mistral7bInstruct);
}

#[tokio::test]
async fn test_sends_identification_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer sk-test"))
        .and(header("content-type", "application/json"))
        .and(header("http-referer", "http://localhost"))
        .and(header("x-title", "Vakyalok - Legal Assistant"))
        .respond_with(reply("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server).send(&legal_question(), None).await;
    assert!(result.is_ok(), "headers should match: {:?}", result);
}

#[tokio::test]
async fn test_reply_is_trimmed() {
    let server = MockServer::start().await;
    mount(&server, reply("  hello  ")).await;

    let completion = gateway_for(&server)
        .send(&Conversation::new().user("hi"), None)
        .await
        .unwrap();
    assert_eq!(completion.text, "hello");
}

#[tokio::test]
async fn test_model_and_params_overrides_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_partial_json(json!({
            "model": "anthropic/claude-3-haiku",
            "max_tokens": 200
        })))
        .respond_with(reply("overridden"))
        .expect(1)
        .mount(&server)
        .await;

    let options = SendOptions::default()
        .with_model(Model::Claude3Haiku)
        .with_params(GenerationParams::default().with_max_tokens(200));
    let completion = gateway_for(&server)
        .send_with(&legal_question(), &options)
        .await
        .unwrap();

    assert_eq!(completion.model, Model::Claude3Haiku);
}

#[tokio::test]
async fn test_custom_model_id_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_partial_json(json!({"model": "meta-llama/llama-3-8b-instruct"})))
        .respond_with(reply("llama"))
        .expect(1)
        .mount(&server)
        .await;

    let model = Model::from("meta-llama/llama-3-8b-instruct");
    let completion = gateway_for(&server)
        .send(&legal_question(), Some(&model))
        .await
        .unwrap();
    assert_eq!(completion.text, "llama");
}

#[tokio::test]
async fn test_empty_conversation_is_forwarded_as_is() {
    let server = MockServer::start().await;
    mount(&server, reply("Please ask a question.")).await;

    gateway_for(&server)
        .send(&Conversation::new(), None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["messages"], json!([]));
}

#[tokio::test]
async fn test_multi_turn_order_is_preserved() {
    let server = MockServer::start().await;
    mount(&server, reply("You may apply for anticipatory bail.")).await;

    let conversation = Conversation::with_system_prompt("You are a legal assistant")
        .user("What is bail?")
        .assistant("Bail is temporary release pending trial.")
        .user("Can I get it before arrest?");

    gateway_for(&server).send(&conversation, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(
        body["messages"],
        json!([
            {"role": "system", "content": "You are a legal assistant"},
            {"role": "user", "content": "What is bail?"},
            {"role": "assistant", "content": "Bail is temporary release pending trial."},
            {"role": "user", "content": "Can I get it before arrest?"}
        ])
    );
}

#[tokio::test]
async fn test_invalid_params_override_never_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(reply("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    for params in [
        GenerationParams::default().with_max_tokens(0),
        GenerationParams::default().with_temperature(f32::NAN),
        GenerationParams::default().with_temperature(2.5),
    ] {
        let err = gateway
            .send_with(&legal_question(), &SendOptions::default().with_params(params))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::RequestFailure);
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_choices_is_malformed() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"choices": []})),
    )
    .await;

    let err = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[tokio::test]
async fn test_blank_content_is_malformed() {
    let server = MockServer::start().await;
    mount(&server, reply(" \n ")).await;

    let err = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap_err();
    assert_eq!(err, GatewayError::malformed());
}

#[tokio::test]
async fn test_unauthorized_is_auth_failure() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "No auth credentials found", "code": 401}
        })),
    )
    .await;

    let err = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::AuthFailure);
    assert!(err.to_string().contains("API key is invalid or expired"));
}

#[tokio::test]
async fn test_too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(429)).await;

    let err = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::RateLimited);
}

#[tokio::test]
async fn test_service_unavailable_is_upstream_failure() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(503)).await;

    let err = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::UpstreamFailure);
}

#[tokio::test]
async fn test_bad_request_carries_upstream_message() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "max_tokens is too large", "code": 400}
        })),
    )
    .await;

    let err = gateway_for(&server)
        .send(&legal_question(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::RequestFailure);
    assert_eq!(err.message(), "API request failed: max_tokens is too large");
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    // Bind then drop a listener so the port is known to be closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let gateway = OpenRouterGateway::new(
        GatewayConfig::new("sk-test").with_base_url(format!("http://127.0.0.1:{}/api/v1", port)),
    )
    .unwrap();

    let err = gateway.send(&legal_question(), None).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::NetworkFailure);
    assert_eq!(err, GatewayError::network());
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let server = MockServer::start().await;
    mount(&server, reply("too late").set_delay(Duration::from_secs(2))).await;

    let gateway = OpenRouterGateway::new(
        GatewayConfig::new("sk-test")
            .with_base_url(format!("{}/api/v1", server.uri()))
            .with_timeout(Some(Duration::from_millis(200))),
    )
    .unwrap();

    let err = gateway.send(&legal_question(), None).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::NetworkFailure);
}

#[tokio::test]
async fn test_one_call_per_send() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    // Failures are not retried
    let _ = gateway_for(&server).send(&legal_question(), None).await;
}

#[tokio::test]
async fn test_draft_use_case_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(body_partial_json(json!({"model": "google/gemma-7b-it"})))
        .respond_with(reply("FIRST INFORMATION REPORT\n..."))
        .expect(1)
        .mount(&server)
        .await;

    let use_case = DraftDocumentUseCase::new(Arc::new(gateway_for(&server)));
    let draft = use_case
        .execute(
            DraftRequest::new(DocumentKind::Fir, "My bicycle was stolen outside the market")
                .with_language(Language::Hindi)
                .with_model(Model::Gemma7bIt),
        )
        .await
        .unwrap();

    assert_eq!(draft.kind, DocumentKind::Fir);
    assert_eq!(draft.language, Language::Hindi);
    assert!(draft.content.starts_with("FIRST INFORMATION REPORT"));

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    assert_eq!(body["messages"][0]["role"], "user");
    assert!(prompt.contains("My bicycle was stolen outside the market"));
}
