pub mod analysis_source;
