use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::errors::{QuantiaError, QuantiaResult};
use crate::logger::analysis_spinner::AnalysisSpinner;
use crate::services::analysis_proxy::AnalysisProxy;
use crate::structs::analysis_query::AnalysisQuery;
use crate::structs::config::config::Config;
use crate::structs::technical_analysis_report::TechnicalAnalysisReport;
use crate::structs::validation_result::ValidationResult;
use crate::ui::app_state::AppState;
use crate::ui::web_server::WebServer;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> QuantiaResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { force } => self.init_command(force),
            Commands::Validate => self.validate_command(),
            Commands::Serve { host, port, open } => self.serve_command(host, port, open).await,
            Commands::Fetch { topic, limit } => self.fetch_command(topic, limit).await,
            Commands::Report => self.report_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> QuantiaResult<Config> {
        match ConfigManager::load(self.config_path.as_deref()) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e.short_message());
                log::error!("💡 Run 'quantia init' to create a configuration file.");
                Err(e)
            }
        }
    }

    fn init_command(&self, force: bool) -> QuantiaResult<()> {
        log::info!("🚀 Initializing quantia configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref(), force)?;
        log::info!("📝 Edit {} to point at your analysis service.", path.display());
        log::info!("🔧 Run 'quantia validate' to check your configuration.");

        Ok(())
    }

    fn validate_command(&self) -> QuantiaResult<()> {
        let config = self.load_config()?;

        let validation = match ConfigManager::validate_config(&config) {
            Ok(()) => ValidationResult::from_errors(Vec::new()),
            Err(errors) => ValidationResult::from_errors(errors),
        };
        validation.print_summary();

        ConfigManager::ensure_valid(&config)
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>, open: bool) -> QuantiaResult<()> {
        let mut config = self.load_config()?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        ConfigManager::ensure_valid(&config)?;

        let client = AnalysisProxy::build_client(config.analysis.timeout())?;
        let proxy = AnalysisProxy::from_config(client, &config.analysis);
        log::info!("🔗 Analysis service: {} (timeout {}s)", proxy.endpoint(), config.analysis.timeout_secs);

        let state = AppState::new(Arc::new(proxy), config.analysis.default_query()?);
        let mut server = WebServer::new(state);
        let addr = Self::resolve_address(&config.server.host, config.server.port).await?;
        let bound = server.start(addr)?;

        if open {
            let url = format!("http://{}/account/login", bound);
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open a browser for {}: {}", url, e);
            }
        }

        log::info!("Press Ctrl-C to stop.");
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| QuantiaError::system_error("waiting for Ctrl-C", &e.to_string()))?;

        server.shutdown().await
    }

    async fn resolve_address(host: &str, port: u16) -> QuantiaResult<SocketAddr> {
        let mut addresses = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| QuantiaError::config_error(&format!("cannot resolve '{}': {}", host, e), Some("server.host"), None))?;

        addresses.next().ok_or_else(|| {
            QuantiaError::config_error(&format!("'{}' resolved to no addresses", host), Some("server.host"), None)
        })
    }

    async fn fetch_command(&self, topic: Option<String>, limit: Option<u32>) -> QuantiaResult<()> {
        let config = self.load_config()?;
        ConfigManager::ensure_valid(&config)?;

        let query = AnalysisQuery::new(
            topic.as_deref().unwrap_or(&config.analysis.default_topic),
            limit.unwrap_or(config.analysis.default_limit),
        )?;

        let client = AnalysisProxy::build_client(config.analysis.timeout())?;
        let proxy = AnalysisProxy::from_config(client, &config.analysis);

        let mut spinner = AnalysisSpinner::new(&query, proxy.timeout());
        spinner.start();

        let cancel = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        let outcome = proxy.fetch_analysis_until(&query, cancel).await;
        spinner.finish(&outcome).await;

        match outcome {
            ProxyOutcome::Success(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(())
            }
            ProxyOutcome::Failure(reason) => Err(QuantiaError::analysis_unavailable(query.topic(), &reason)),
        }
    }

    fn report_command(&self) -> QuantiaResult<()> {
        println!("{}", serde_json::to_string_pretty(TechnicalAnalysisReport::current())?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_then_validate_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut runner = CommandRunner::new(Some(path.clone()));

        runner.run_command(Commands::Init { force: false }).await.unwrap();
        assert!(path.exists());

        runner.run_command(Commands::Validate).await.unwrap();
    }

    #[tokio::test]
    async fn validate_fails_for_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ndefault_limit = 0\n").unwrap();
        let mut runner = CommandRunner::new(Some(path));

        let error = runner.run_command(Commands::Validate).await.unwrap_err();

        assert!(matches!(error, QuantiaError::MultipleErrors { .. }));
    }

    #[tokio::test]
    async fn fetch_rejects_invalid_limit_before_calling_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\nbase_url = \"http://127.0.0.1:9\"\n").unwrap();
        let mut runner = CommandRunner::new(Some(path));

        let error = runner
            .run_command(Commands::Fetch { topic: None, limit: Some(0) })
            .await
            .unwrap_err();

        assert!(matches!(error, QuantiaError::ValidationError { ref field, .. } if field == "limit"));
    }

    #[tokio::test]
    async fn resolve_address_handles_hostnames() {
        let addr = CommandRunner::resolve_address("localhost", 5000).await.unwrap();

        assert_eq!(addr.port(), 5000);
        assert!(addr.ip().is_loopback());
    }
}
