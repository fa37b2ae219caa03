use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;

pub const DEFAULT_ANALYSIS_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_ANALYSIS_TOPIC: &str = "gold";
pub const DEFAULT_ANALYSIS_LIMIT: u32 = 10;
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 10;
pub const MAX_ANALYSIS_LIMIT: u32 = 100;
pub const ANALYZE_ENDPOINT: &str = "analyze";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVEL_ENV: &str = "QUANTIA_LOG";

pub const CONFIG_DIR_NAME: &str = "quantia";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const MAX_FORM_BODY_BYTES: u64 = 16 * 1024;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const SERVER_SHUTDOWN_TIMEOUT_MS: u64 = 5000;

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
