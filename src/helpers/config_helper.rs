use crate::config::constants::{
    DEFAULT_ANALYSIS_BASE_URL, DEFAULT_ANALYSIS_LIMIT, DEFAULT_ANALYSIS_TIMEOUT_SECS,
    DEFAULT_ANALYSIS_TOPIC, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_base_url() -> String {
        DEFAULT_ANALYSIS_BASE_URL.to_string()
    }

    pub fn default_topic() -> String {
        DEFAULT_ANALYSIS_TOPIC.to_string()
    }

    pub fn default_limit() -> u32 {
        DEFAULT_ANALYSIS_LIMIT
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_ANALYSIS_TIMEOUT_SECS
    }
}
