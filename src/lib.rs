//! Quantia web front end.
//!
//! Account pages, a dashboard backed by an external analysis service, and a
//! technical analysis report. The only outbound dependency is the analysis
//! service, reached through [`services::analysis_proxy::AnalysisProxy`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
