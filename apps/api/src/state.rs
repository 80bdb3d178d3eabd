use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory document sessions. The only mutable state in the service.
    pub sessions: SessionStore,
    /// Present only when ANTHROPIC_API_KEY is configured; refinement
    /// endpoints degrade to identity without it.
    pub llm: Option<LlmClient>,
    pub config: Config,
}
