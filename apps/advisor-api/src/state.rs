//! Application state for the advisor API

use recommendation_engine::RecommendationEngine;

/// Built once at startup; the engine and its catalog are read-only, so
/// concurrent handlers share this without locking.
pub struct AppState {
    pub engine: RecommendationEngine,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: RecommendationEngine::new(),
        }
    }
}
