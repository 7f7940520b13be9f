//! Completion provider abstractions and implementations.
//!
//! The gateway talks to its language model through [`CompletionProvider`],
//! so the OpenAI client can be swapped for the scripted mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Failure while invoking or interpreting the completion service.
///
/// The `Display` text is what callers see after the `"Error: "` prefix, so
/// service-supplied messages are passed through without decoration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from completion service: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Stable label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured(_) => "not_configured",
            Self::Authentication(_) => "authentication",
            Self::RateLimited(_) => "rate_limited",
            Self::Api { .. } => "api",
            Self::Network(_) => "network",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// One chat message sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Parameters of a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    pub fn from_api(reason: Option<&str>) -> Self {
        match reason {
            Some("stop") | None => Self::Complete,
            Some("length") => Self::Length,
            Some("content_filter") => Self::ContentFilter,
            Some(_) => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Length => "length",
            Self::ContentFilter => "content_filter",
            Self::Other => "other",
        }
    }
}

/// Token accounting reported by the service, when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Text of the first returned choice, untrimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub finish_reason: FinishReason,
    pub usage: Option<TokenUsage>,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name used in metrics labels.
    fn name(&self) -> &'static str;

    /// Perform exactly one completion call.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError>;

    /// Local readiness check; must not reach the network.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
