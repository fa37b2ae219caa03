pub mod commands;
pub mod proxy_error;
pub mod proxy_outcome;
