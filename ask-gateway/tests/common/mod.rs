#![allow(dead_code)]

use ask_gateway::config::{GatewayConfig, OpenAiConfig};
use ask_gateway::services::providers::CompletionProvider;
use ask_gateway::{build_router, AppState};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use gateway_core::config::Config;
use http_body_util::BodyExt;
use secrecy::Secret;
use std::sync::Arc;

pub fn test_config(base_url: &str, api_key: Option<&str>) -> GatewayConfig {
    GatewayConfig {
        common: Config {
            port: 0,
            log_level: "error".to_string(),
        },
        openai: OpenAiConfig {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            base_url: base_url.to_string(),
            ..OpenAiConfig::default()
        },
        otlp_endpoint: None,
    }
}

pub fn router_with(provider: Arc<dyn CompletionProvider>) -> Router {
    build_router(AppState::new(
        test_config("http://127.0.0.1:1", Some("sk-test")),
        provider,
    ))
}

pub fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/ask")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Router backed by the real OpenAI client pointed at `base_url`.
pub fn openai_router(base_url: &str, api_key: Option<&str>) -> Router {
    let config = test_config(base_url, api_key);
    let provider = ask_gateway::services::providers::openai::OpenAiProvider::new(config.openai.clone())
        .expect("Failed to create OpenAI provider");
    build_router(AppState::new(config, Arc::new(provider)))
}
