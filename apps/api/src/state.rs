use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::llm_client::TextGenerator;
use crate::roadmap::store::RoadmapStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Roadmap persistence. Default: `PgRoadmapStore`.
    pub store: Arc<dyn RoadmapStore>,
    /// Generative-text backend. Default: the Gemini `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    pub verifier: TokenVerifier,
}
