use crate::enums::proxy_error::ProxyError;
use crate::structs::analysis_result::AnalysisResult;

pub const UNKNOWN_FAILURE_REASON: &str = "unknown error";

/// Result of one call to the external analysis service.
///
/// A `Failure` always carries a non-empty, human-readable reason; build it
/// through [`ProxyOutcome::failure`] or `From<ProxyError>`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    Success(AnalysisResult),
    Failure(String),
}

impl ProxyOutcome {
    pub fn success(result: AnalysisResult) -> Self {
        ProxyOutcome::Success(result)
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return ProxyOutcome::Failure(UNKNOWN_FAILURE_REASON.to_string());
        }
        ProxyOutcome::Failure(reason)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProxyOutcome::Success(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ProxyOutcome::Success(result) => Some(result),
            ProxyOutcome::Failure(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ProxyOutcome::Success(_) => None,
            ProxyOutcome::Failure(reason) => Some(reason),
        }
    }
}

impl From<ProxyError> for ProxyOutcome {
    fn from(error: ProxyError) -> Self {
        ProxyOutcome::failure(error.to_string())
    }
}

impl From<Result<AnalysisResult, ProxyError>> for ProxyOutcome {
    fn from(result: Result<AnalysisResult, ProxyError>) -> Self {
        match result {
            Ok(result) => ProxyOutcome::success(result),
            Err(error) => error.into(),
        }
    }
}
