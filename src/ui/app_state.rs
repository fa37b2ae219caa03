use std::sync::Arc;
use crate::structs::analysis_query::AnalysisQuery;
use crate::traits::analysis_source::AnalysisSource;

/// Shared by every request handler; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn AnalysisSource>,
    pub defaults: AnalysisQuery,
}

impl AppState {
    pub fn new(source: Arc<dyn AnalysisSource>, defaults: AnalysisQuery) -> Self {
        Self { source, defaults }
    }
}
