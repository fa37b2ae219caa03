use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::timeout_duration_secs;
use crate::errors::QuantiaResult;
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::analysis_query::AnalysisQuery;

/// Where the external analysis service lives and what the dashboard asks it
/// by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_topic")]
    pub default_topic: String,

    #[serde(default = "ConfigHelper::default_limit")]
    pub default_limit: u32,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        timeout_duration_secs(self.timeout_secs)
    }

    pub fn default_query(&self) -> QuantiaResult<AnalysisQuery> {
        AnalysisQuery::new(&self.default_topic, self.default_limit)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            default_topic: ConfigHelper::default_topic(),
            default_limit: ConfigHelper::default_limit(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
