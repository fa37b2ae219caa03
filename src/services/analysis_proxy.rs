use std::future::Future;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;
use uuid::Uuid;
use crate::config::constants::ANALYZE_ENDPOINT;
use crate::enums::proxy_error::ProxyError;
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::errors::{QuantiaError, QuantiaResult};
use crate::structs::analysis_query::AnalysisQuery;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::traits::analysis_source::AnalysisSource;

/// Client side of the external analysis service.
///
/// One GET per call, no retry, bounded by `timeout`. Every failure mode ends
/// up as [`ProxyOutcome::Failure`]; nothing is returned as an error.
#[derive(Clone)]
pub struct AnalysisProxy {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AnalysisProxy {
    pub fn new(client: Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(client: Client, config: &AnalysisConfig) -> Self {
        Self::new(client, &config.base_url, config.timeout())
    }

    /// The process-wide client; share it between proxies via `clone()`.
    pub fn build_client(connect_timeout: Duration) -> QuantiaResult<Client> {
        Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(concat!("quantia/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QuantiaError::system_error("building HTTP client", &e.to_string()))
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, ANALYZE_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch_analysis(&self, query: &AnalysisQuery) -> ProxyOutcome {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        log::debug!(
            "[{}] GET {}?topic={}&limit={}",
            request_id, self.endpoint(), query.topic(), query.limit()
        );

        let result = match timeout(self.timeout, self.request(query)).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::Timeout(self.timeout)),
        };

        match &result {
            Ok(payload) => log::info!(
                "📈 [{}] analysis for '{}' received ({} fields) in {:.2}s",
                request_id, query.topic(), payload.len(), started.elapsed().as_secs_f64()
            ),
            Err(e) => log::warn!(
                "⚠️ [{}] analysis for '{}' failed after {:.2}s: {}",
                request_id, query.topic(), started.elapsed().as_secs_f64(), e
            ),
        }

        ProxyOutcome::from(result)
    }

    /// Like [`fetch_analysis`](Self::fetch_analysis), but gives up as soon as
    /// `cancel` completes. The in-flight request is dropped and the outcome
    /// is `Failure("cancelled")`.
    pub async fn fetch_analysis_until<C>(&self, query: &AnalysisQuery, cancel: C) -> ProxyOutcome
    where
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                log::info!("🛑 analysis for '{}' cancelled by caller", query.topic());
                ProxyOutcome::from(ProxyError::Cancelled)
            }
            outcome = self.fetch_analysis(query) => outcome,
        }
    }

    async fn request(&self, query: &AnalysisQuery) -> Result<AnalysisResult, ProxyError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| ProxyError::transport(&e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Network(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProxyError::transport(&e, self.timeout))?;
        let payload = serde_json::from_str::<AnalysisResult>(&body)?;
        Ok(payload)
    }
}

#[async_trait]
impl AnalysisSource for AnalysisProxy {
    async fn fetch_analysis(&self, query: &AnalysisQuery) -> ProxyOutcome {
        AnalysisProxy::fetch_analysis(self, query).await
    }
}
