use serde::{Deserialize, Serialize};
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::structs::analysis_result::AnalysisResult;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: "ok".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

impl From<ProxyOutcome> for ApiResponse<AnalysisResult> {
    fn from(outcome: ProxyOutcome) -> Self {
        match outcome {
            ProxyOutcome::Success(result) => ApiResponse::ok(result),
            ProxyOutcome::Failure(reason) => ApiResponse::error(reason),
        }
    }
}
