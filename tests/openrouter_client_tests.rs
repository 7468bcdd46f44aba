//! HTTP-level tests for the OpenRouter client against a local mock server.

use std::sync::Arc;
use std::time::Duration;

use learnerbot::{
    ChatMessage, ClientConfig, ListModelsUseCase, OpenRouterClient, Role, SendMessageUseCase,
    SYSTEM_PROMPT,
};
use serde_json::{json, Value};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "sk-or-test-key";

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(Some(API_KEY.to_string()))
        .with_base_url(server.uri())
        .with_site_url("https://learnerbot.test")
        .with_site_name("LearnerBot Test")
        .with_request_timeout(Some(Duration::from_secs(5)))
}

fn send_message_use_case(config: ClientConfig) -> SendMessageUseCase {
    SendMessageUseCase::new(Arc::new(OpenRouterClient::new(config)))
}

fn completion_body(content: &str) -> Value {
    json!({
        "id": "gen-123",
        "model": "openai/gpt-4o",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content}
        }]
    })
}

async fn mount_completion(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

async fn sent_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    requests[0].body_json().expect("JSON request body")
}

#[tokio::test]
async fn test_success_returns_trimmed_reply() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        ResponseTemplate::new(200).set_body_json(completion_body(
            "\n  Volcanoes are mountains that burp lava! 🌋  \n",
        )),
    )
    .await;

    let resp = send_message_use_case(config_for(&server))
        .execute("What is a volcano?", &[])
        .await;

    assert_eq!(resp.message(), "Volcanoes are mountains that burp lava! 🌋");
    assert_eq!(resp.error(), None);
}

#[tokio::test]
async fn test_request_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-or-test-key"))
        .and(header("HTTP-Referer", "https://learnerbot.test"))
        .and(header("X-Title", "LearnerBot Test"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let resp = send_message_use_case(config_for(&server)).execute("hi", &[]).await;

    assert!(resp.is_success(), "unexpected error: {:?}", resp.error());
}

#[tokio::test]
async fn test_request_body_parameters() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        ResponseTemplate::new(200).set_body_json(completion_body("ok")),
    )
    .await;

    send_message_use_case(config_for(&server).with_model("openai/gpt-4o-mini"))
        .execute("hi", &[])
        .await;

    let body = sent_body(&server).await;
    assert_eq!(body["model"], "openai/gpt-4o-mini");
    assert_eq!(body["max_tokens"], 1500);
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["top_p"], 0.9);
    assert_eq!(body["frequency_penalty"], 0.1);
    assert_eq!(body["presence_penalty"], 0.1);
    assert_eq!(body["stream"], false);
}

#[tokio::test]
async fn test_messages_wrap_history_in_order() {
    let history = vec![
        ChatMessage::user("What is 7 x 8?"),
        ChatMessage::assistant("56! 🎉"),
        ChatMessage::user("And 7 x 9?"),
        ChatMessage::assistant("63!"),
    ];

    for len in [0, 1, history.len()] {
        let server = MockServer::start().await;
        mount_completion(
            &server,
            ResponseTemplate::new(200).set_body_json(completion_body("ok")),
        )
        .await;

        send_message_use_case(config_for(&server))
            .execute("Now quiz me!", &history[..len])
            .await;

        let body = sent_body(&server).await;
        let sent: Vec<ChatMessage> = serde_json::from_value(body["messages"].clone()).unwrap();

        assert_eq!(sent.len(), len + 2);
        assert_eq!(sent[0], ChatMessage::system(SYSTEM_PROMPT));
        assert_eq!(&sent[1..=len], &history[..len]);
        let last = sent.last().unwrap();
        assert_eq!(last.role(), Role::User);
        assert_eq!(last.content(), "Now quiz me!");
    }
}

#[tokio::test]
async fn test_empty_message_is_forwarded() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        ResponseTemplate::new(200).set_body_json(completion_body("Hi!")),
    )
    .await;

    let resp = send_message_use_case(config_for(&server)).execute("", &[]).await;

    assert_eq!(resp.message(), "Hi!");
    let body = sent_body(&server).await;
    assert_eq!(body["messages"][1], json!({"role": "user", "content": ""}));
}

#[tokio::test]
async fn test_missing_api_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("should not happen")),
        )
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::new(None).with_base_url(server.uri());
    let use_case = send_message_use_case(config);

    for input in ["", "hello", "explain gravity"] {
        let resp = use_case.execute(input, &[ChatMessage::user("earlier")]).await;
        assert_eq!(resp.error(), Some("API key not configured"));
        assert!(resp.message().contains("API key"));
    }
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    for status in [429u16, 500] {
        let server = MockServer::start().await;
        mount_completion(
            &server,
            ResponseTemplate::new(status)
                .set_body_json(json!({"error": {"message": "rate limited", "code": status}})),
        )
        .await;

        let resp = send_message_use_case(config_for(&server)).execute("hi", &[]).await;

        assert_eq!(resp.message(), "");
        assert_eq!(resp.error(), Some("rate limited"));
    }
}

#[tokio::test]
async fn test_error_without_body_names_status() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let resp = send_message_use_case(config_for(&server)).execute("hi", &[]).await;

    assert_eq!(resp.message(), "");
    assert_eq!(
        resp.error(),
        Some("OpenRouter API request failed with status 503")
    );
}

#[tokio::test]
async fn test_missing_choices_is_malformed() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"id": "gen-1", "object": "chat.completion"})),
    )
    .await;

    let resp = send_message_use_case(config_for(&server)).execute("hi", &[]).await;

    assert_eq!(resp.message(), "");
    assert_eq!(resp.error(), Some("Invalid response format from the provider"));
}

#[tokio::test]
async fn test_wrongly_typed_choices_are_malformed() {
    let bodies = [
        json!({"choices": [null]}),
        json!({"choices": "oops"}),
        json!({"choices": [{"message": "hi"}]}),
        json!({"choices": [{"message": {"content": 42}}]}),
        json!({"choices": [{"message": {"role": "assistant", "content": null}}]}),
    ];

    for body in bodies {
        let server = MockServer::start().await;
        mount_completion(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

        let resp = send_message_use_case(config_for(&server)).execute("hi", &[]).await;

        assert_eq!(resp.message(), "", "body {body}");
        assert_eq!(
            resp.error(),
            Some("Invalid response format from the provider"),
            "body {body}"
        );
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_an_error() {
    let server = MockServer::start().await;
    mount_completion(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let resp = send_message_use_case(config_for(&server)).execute("hi", &[]).await;

    assert_eq!(resp.message(), "");
    assert!(resp.error().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let config = ClientConfig::new(Some(API_KEY.to_string()))
        .with_base_url("http://127.0.0.1:1")
        .with_request_timeout(Some(Duration::from_secs(2)));

    let resp = send_message_use_case(config).execute("hi", &[]).await;

    assert_eq!(resp.message(), "");
    assert!(resp.error().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_list_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("Authorization", "Bearer sk-or-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "openai/gpt-4o", "name": "OpenAI: GPT-4o", "context_length": 128000},
                {"id": "meta-llama/llama-3.1-8b-instruct", "name": "Llama 3.1 8B"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let use_case = ListModelsUseCase::new(Arc::new(OpenRouterClient::new(config_for(&server))));
    let models = use_case.execute().await;

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].id(), Some("openai/gpt-4o"));
    assert_eq!(models[0].raw()["context_length"], 128000);
    assert_eq!(models[1].name(), Some("Llama 3.1 8B"));
}

#[tokio::test]
async fn test_list_models_without_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let use_case = ListModelsUseCase::new(Arc::new(OpenRouterClient::new(config_for(&server))));

    assert!(use_case.try_execute().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_models_failure_is_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let use_case = ListModelsUseCase::new(Arc::new(OpenRouterClient::new(config_for(&server))));

    assert!(use_case.execute().await.is_empty());
    let err = use_case.try_execute().await.unwrap_err();
    assert!(err.is_request_failed());
    assert_eq!(err.to_string(), "Failed to fetch models");
}

#[tokio::test]
async fn test_list_models_network_failure_is_swallowed() {
    let config = ClientConfig::new(Some(API_KEY.to_string()))
        .with_base_url("http://127.0.0.1:1")
        .with_request_timeout(Some(Duration::from_secs(2)));
    let use_case = ListModelsUseCase::new(Arc::new(OpenRouterClient::new(config)));

    assert!(use_case.execute().await.is_empty());
    assert!(use_case.try_execute().await.unwrap_err().is_transport());
}
