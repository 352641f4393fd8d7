//! In-process `CompletionService` for tests. Records every call.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub temperature: f64,
}

pub struct FakeCompletion {
    reply: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the upstream returned a 500.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for FakeCompletion {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            prompt: request.prompt.to_string(),
            temperature: request.temperature,
        });
        self.reply.clone().ok_or(LlmError::Api {
            status: 500,
            message: "upstream unavailable".to_string(),
        })
    }
}
