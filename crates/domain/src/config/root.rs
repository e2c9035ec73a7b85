use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::client::ClientConfig;
use super::distribution::DistributionConfig;
use super::errors::ConfigError;
use super::ingest::IngestConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "dnstap-fanout.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnstap-fanout/config.toml";

/// Main configuration structure, shared by the server and the tap client binaries
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Frame Streams ingest socket
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Fact distribution listener
    #[serde(default)]
    pub distribution: DistributionConfig,

    /// Tap client connection settings
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnstap-fanout.toml in current directory
    /// 3. /etc/dnstap-fanout/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(socket) = overrides.socket_path {
            self.ingest.socket_path = socket;
        }
        if let Some(bind) = overrides.bind_address {
            self.distribution.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.distribution.port = port;
            self.client.port = port;
        }
        if let Some(host) = overrides.host {
            self.client.host = host;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ingest.socket_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Ingest socket path cannot be empty".to_string(),
            ));
        }

        if self.ingest.max_frame_size == 0 {
            return Err(ConfigError::Validation(
                "max_frame_size must be greater than 0".to_string(),
            ));
        }

        if self.client.port == 0 {
            return Err(ConfigError::Validation(
                "Client port cannot be 0".to_string(),
            ));
        }

        if self.client.reconnect_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "reconnect_delay_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load(None, ..)` would use
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub socket_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    /// Distribution port; the client connects to the same port.
    pub port: Option<u16>,
    pub host: Option<String>,
    pub log_level: Option<String>,
}
