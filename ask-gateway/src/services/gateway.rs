//! The completion gateway: question in, answer text out.

use crate::services::metrics;
use crate::services::prompt::build_prompt;
use crate::services::providers::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError};
use std::sync::Arc;
use std::time::Instant;

/// Upper bound on generated tokens for every answer.
pub const MAX_OUTPUT_TOKENS: u32 = 500;

/// Sampling temperature for every answer.
pub const TEMPERATURE: f64 = 0.7;

/// Prefix of the `response` text when the completion call failed.
/// Callers branch on it, so it must not change.
pub const ERROR_PREFIX: &str = "Error: ";

#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// The exact call made for `question`; only the prompt varies.
    pub fn completion_request(&self, question: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(build_prompt(question))],
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    /// Call the provider once and return the trimmed first choice.
    pub async fn ask(&self, question: &str) -> Result<String, ProviderError> {
        let request = self.completion_request(question);
        let provider = self.provider.name();

        let started = Instant::now();
        let result = self.provider.complete(&request).await;
        metrics::record_completion_latency(provider, &self.model, started.elapsed().as_secs_f64());

        let completion = result.inspect_err(|e| {
            metrics::record_completion_error(provider, e.kind());
        })?;

        if let Some(usage) = completion.usage {
            metrics::record_tokens(&self.model, usage.input_tokens, usage.output_tokens);
        }

        tracing::debug!(
            provider,
            finish_reason = completion.finish_reason.as_str(),
            answer_len = completion.text.len(),
            "Completion received"
        );

        Ok(completion.text.trim().to_string())
    }

    /// Like [`ask`](Self::ask), but folds any failure into
    /// `"Error: <description>"`. The description goes to the caller only;
    /// server-side it is counted by kind and never logged.
    pub async fn answer(&self, question: &str) -> String {
        match self.ask(question).await {
            Ok(answer) => {
                metrics::record_ask("success");
                answer
            }
            Err(e) => {
                tracing::debug!(error_type = e.kind(), "Completion request failed");
                metrics::record_ask("error");
                format!("{ERROR_PREFIX}{e}")
            }
        }
    }

    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}
