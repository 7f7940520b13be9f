//! `/ask` end to end through the OpenAI client against a mock API server.

mod common;

use ask_gateway::services::prompt::build_prompt;
use axum::http::StatusCode;
use common::{ask_request, body_json, openai_router};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{self, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 40, "completion_tokens": 3, "total_tokens": 43}
    })
}

#[tokio::test]
async fn sends_fixed_chat_completion_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(matchers::body_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": build_prompt("Does God exist?")}],
            "max_tokens": 500,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(" Yes. ")))
        .expect(1)
        .mount(&server)
        .await;

    let response = openai_router(&server.uri(), Some("sk-test"))
        .oneshot(ask_request(r#"{"question": "Does God exist?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"response": "Yes."}));
}

#[tokio::test]
async fn empty_question_still_calls_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(matchers::body_partial_json(json!({
            "messages": [{"role": "user", "content": build_prompt("")}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("\nIt seems no question was asked.\n")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = openai_router(&server.uri(), Some("sk-test"))
        .oneshot(ask_request("{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"],
        "It seems no question was asked."
    );
}

#[tokio::test]
async fn authentication_error_is_returned_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided: sk-bad. You can find your API key at https://platform.openai.com/account/api-keys.",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = openai_router(&server.uri(), Some("sk-bad"))
        .oneshot(ask_request(r#"{"question": "Does God exist?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "response": "Error: Incorrect API key provided: sk-bad. You can find your API key at https://platform.openai.com/account/api-keys."
        })
    );
}

#[tokio::test]
async fn quota_error_is_returned_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "You exceeded your current quota.", "type": "insufficient_quota"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = openai_router(&server.uri(), Some("sk-test"))
        .oneshot(ask_request(r#"{"question": "?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"],
        "Error: You exceeded your current quota."
    );
}

#[tokio::test]
async fn unexpected_response_shape_is_returned_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = openai_router(&server.uri(), Some("sk-test"))
        .oneshot(ask_request(r#"{"question": "?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["response"],
        "Error: Invalid response from completion service: response contained no choices"
    );
}

#[tokio::test]
async fn missing_api_key_fails_without_calling_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let response = openai_router(&server.uri(), None)
        .oneshot(ask_request(r#"{"question": "?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_json(response).await["response"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.starts_with("Error: No API key provided."));
}

#[tokio::test]
async fn unreachable_service_is_returned_as_text() {
    // Nothing listens on port 1.
    let response = openai_router("http://127.0.0.1:1", Some("sk-test"))
        .oneshot(ask_request(r#"{"question": "?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_json(response).await["response"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.starts_with("Error: Network error:"), "got {text}");
}
