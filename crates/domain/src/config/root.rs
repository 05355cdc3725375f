use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use crate::HEADER_LEN;

const LOCAL_CONFIG_PATH: &str = "dnsreq.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsreq/config.toml";

/// Main configuration structure for dnsreq
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Upstream server and query options
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsreq.toml in current directory
    /// 3. /etc/dnsreq/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.resolver.server = server;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(attempts) = overrides.attempts {
            self.resolver.attempts = attempts;
        }
        if overrides.recursion_desired {
            self.resolver.recursion_desired = true;
        }
        if let Some(id) = overrides.transaction_id {
            self.resolver.transaction_id = Some(id);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server_addr()?;

        if self.resolver.attempts == 0 {
            return Err(ConfigError::Validation(
                "attempts must be at least 1".to_string(),
            ));
        }
        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout_ms cannot be 0".to_string(),
            ));
        }
        if self.resolver.recv_buffer_size < HEADER_LEN {
            return Err(ConfigError::Validation(format!(
                "recv_buffer_size must be at least {} bytes",
                HEADER_LEN
            )));
        }

        Ok(())
    }

    pub fn server_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.resolver.server.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Invalid server address '{}' (expected ip:port)",
                self.resolver.server
            ))
        })
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub timeout_ms: Option<u64>,
    pub attempts: Option<u32>,
    pub recursion_desired: bool,
    pub transaction_id: Option<u16>,
    pub log_level: Option<String>,
}
