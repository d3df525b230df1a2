use std::sync::Arc;

use crate::config::Config;
use crate::screening::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer seam. Production: GeminiAnalyzer. Tests swap in
    /// canned implementations.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
