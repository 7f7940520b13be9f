//! Mock provider implementation for testing.

use super::{Completion, CompletionProvider, CompletionRequest, FinishReason, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted provider: returns a fixed reply (or error) and records every
/// request it receives.
pub struct MockCompletionProvider {
    outcome: Result<String, ProviderError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionProvider {
    /// Provider whose first choice text is `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider that fails every call with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        let text = self.outcome.clone()?;
        Ok(Completion {
            text,
            finish_reason: FinishReason::Complete,
            usage: None,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.outcome {
            Err(err @ ProviderError::NotConfigured(_)) => Err(err.clone()),
            _ => Ok(()),
        }
    }
}
