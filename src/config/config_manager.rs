use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_ANALYSIS_LIMIT};
use crate::errors::{QuantiaError, QuantiaResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Quantia configuration

[server]
# Address the web front end listens on
host = "127.0.0.1"
port = 5000

[analysis]
# External analysis service; requests go to {base_url}/analyze?topic=..&limit=..
base_url = "http://127.0.0.1:8000"

# What the dashboard asks for when the request does not say
default_topic = "gold"
default_limit = 10

# Upper bound on a single call to the analysis service
timeout_secs = 10
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the configuration. An explicit path must exist; when no path is
    /// given and the default file is absent, built-in defaults are used.
    pub fn load(path: Option<&Path>) -> QuantiaResult<Config> {
        let (config_path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !config_path.exists() {
            if explicit {
                return Err(QuantiaError::config_file_error(
                    &config_path.display().to_string(),
                    "file does not exist",
                ));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(|e| {
            QuantiaError::config_file_error(&config_path.display().to_string(), &e.to_string())
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> QuantiaResult<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config(path: Option<&Path>, force: bool) -> QuantiaResult<PathBuf> {
        let config_file_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if config_file_path.exists() && !force {
            return Err(QuantiaError::config_error(
                &format!("{} already exists", config_file_path.display()),
                None,
                Some("Pass --force to overwrite it"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        match Url::parse(&config.analysis.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "analysis.base_url must use http or https, got '{}'",
                url.scheme()
            )),
            Err(e) => errors.push(format!(
                "analysis.base_url '{}' is not a valid URL: {}",
                config.analysis.base_url, e
            )),
        }

        if config.analysis.default_topic.trim().is_empty() {
            errors.push("analysis.default_topic must not be empty".to_string());
        }

        if config.analysis.default_limit == 0 || config.analysis.default_limit > MAX_ANALYSIS_LIMIT {
            errors.push(format!(
                "analysis.default_limit must be between 1 and {}, got {}",
                MAX_ANALYSIS_LIMIT, config.analysis.default_limit
            ));
        }

        if config.analysis.timeout_secs == 0 {
            errors.push("analysis.timeout_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate_config` folded into a single error for callers that stop on
    /// the first bad configuration.
    pub fn ensure_valid(config: &Config) -> QuantiaResult<()> {
        Self::validate_config(config).map_err(|errors| QuantiaError::MultipleErrors {
            errors: errors
                .iter()
                .map(|e| QuantiaError::config_error(e, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::config::constants::{DEFAULT_ANALYSIS_LIMIT, DEFAULT_ANALYSIS_TOPIC, DEFAULT_SERVER_PORT};

    #[test]
    fn sample_config_parses_and_validates() {
        let config = ConfigManager::parse(ConfigManager::sample_config()).unwrap();

        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigManager::parse("[analysis]\nbase_url = \"http://analysis:9000\"\n").unwrap();

        assert_eq!(config.analysis.base_url, "http://analysis:9000");
        assert_eq!(config.analysis.default_topic, DEFAULT_ANALYSIS_TOPIC);
        assert_eq!(config.analysis.default_limit, DEFAULT_ANALYSIS_LIMIT);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\ndefault_topic = \"silver\"\ndefault_limit = 25").unwrap();

        let config = ConfigManager::load(Some(file.path())).unwrap();

        assert_eq!(config.analysis.default_topic, "silver");
        assert_eq!(config.analysis.default_limit, 25);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = ConfigManager::load(Some(&dir.path().join("absent.toml"))).unwrap_err();

        assert!(matches!(error, QuantiaError::ConfigurationFileError { .. }));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis\nbase_url = 3").unwrap();

        let error = ConfigManager::load(Some(file.path())).unwrap_err();

        assert!(matches!(error, QuantiaError::ParseError { .. }));
    }

    #[test]
    fn create_sample_config_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = ConfigManager::create_sample_config(Some(&path), false).unwrap();
        assert_eq!(written, path);
        assert!(ConfigManager::create_sample_config(Some(&path), false).is_err());
        assert!(ConfigManager::create_sample_config(Some(&path), true).is_ok());

        let config = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn validate_collects_every_problem() {
        let mut config = Config::default();
        config.server.host = " ".to_string();
        config.analysis.base_url = "ftp://example.com".to_string();
        config.analysis.default_topic = String::new();
        config.analysis.default_limit = 0;
        config.analysis.timeout_secs = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 5);
        assert!(ConfigManager::ensure_valid(&config).is_err());
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.analysis.base_url = "not a url".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("not a valid URL"));
    }
}
