pub mod analysis_proxy;
