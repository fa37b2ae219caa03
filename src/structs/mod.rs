pub mod analysis_query;
pub mod analysis_result;
pub mod api_response;
pub mod cli;
pub mod config;
pub mod login_form;
pub mod register_form;
pub mod technical_analysis_report;
pub mod validation_result;
