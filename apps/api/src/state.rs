use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobSource;
use crate::llm_client::LanguageModel;
use crate::report::ReportRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Default: `LlmClient` against the Anthropic Messages API. Tests swap in stubs.
    pub llm: Arc<dyn LanguageModel>,
    /// Boards queried for recommendations, in response order.
    pub job_sources: Arc<[Arc<dyn JobSource>]>,
    pub renderer: ReportRenderer,
    pub config: Config,
}
