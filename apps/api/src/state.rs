use crate::config::Config;
use crate::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Carries the completion service chosen at startup, or none when no API
    /// key is configured.
    pub pipeline: Pipeline,
    pub config: Config,
}
