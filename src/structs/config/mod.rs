pub mod analysis_config;
pub mod config;
pub mod server_config;
