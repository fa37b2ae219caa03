use async_trait::async_trait;
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::structs::analysis_query::AnalysisQuery;

/// Anything that can answer an analysis query. Page handlers depend on this
/// rather than on the HTTP proxy directly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisSource: Send + Sync {
    async fn fetch_analysis(&self, query: &AnalysisQuery) -> ProxyOutcome;
}
