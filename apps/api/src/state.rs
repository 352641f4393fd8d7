use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: the OpenAI-compatible `LlmClient`.
    pub completion: Arc<dyn CompletionService>,
}
