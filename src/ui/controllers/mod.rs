pub mod account_controller;
pub mod dashboard_controller;
pub mod technical_analysis_controller;
