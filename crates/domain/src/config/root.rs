use serde::{Deserialize, Serialize};

use super::blocklist::BlocklistConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::report::ReportConfig;
use super::server::ServerConfig;

/// Main configuration structure for Blockcheck
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Blocklist source and cache configuration
    #[serde(default)]
    pub blocklist: BlocklistConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Periodic lookup report configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Command-line overrides applied on top of file configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub source_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. blockcheck.toml in current directory
    /// 3. /etc/blockcheck/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("blockcheck.toml").exists() {
            Self::from_file("blockcheck.toml")?
        } else if std::path::Path::new("/etc/blockcheck/config.toml").exists() {
            Self::from_file("/etc/blockcheck/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.source_url {
            self.blocklist.source_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.blocklist.source_url.is_empty() {
            return Err(ConfigError::Validation(
                "Blocklist source URL cannot be empty".to_string(),
            ));
        }

        if self.blocklist.cache_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Blocklist cache TTL cannot be 0".to_string(),
            ));
        }

        if self.blocklist.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Blocklist fetch timeout cannot be 0".to_string(),
            ));
        }

        if self.report.enabled {
            if self.report.domains.is_empty() {
                return Err(ConfigError::Validation(
                    "Report is enabled but no watchlist domains are configured".to_string(),
                ));
            }
            if self.report.telegram_bot_token.is_none() || self.report.telegram_chat_id.is_none() {
                return Err(ConfigError::Validation(
                    "Report is enabled but Telegram credentials are missing".to_string(),
                ));
            }
        }

        Ok(())
    }
}
