use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::jobs::JobBoardClient;
use crate::sink::ResultSink;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every external collaborator sits behind a trait so tests can swap in
/// stubs without touching handler code.
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings. Read during wiring in `main`; kept here for
    /// handlers that grow config-dependent behavior.
    #[allow(dead_code)]
    pub config: Config,
    /// Turns an uploaded résumé into lowercase plain text.
    pub extractor: Arc<dyn TextExtractor>,
    /// Fetches posting snippets per job title; degrades to empty on failure.
    pub job_board: Arc<dyn JobBoardClient>,
    /// Appends finished assessments; treated as fire-and-forget.
    pub sink: Arc<dyn ResultSink>,
}
