//! Server configuration loading

use anyhow::Result;
use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Server configuration
///
/// Resolution order: YAML file (when `MEALDROP_CONFIG` names one), then
/// environment variables (`MEALDROP_HOST`, `MEALDROP_PORT`), then defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Build configuration from the environment, falling back to defaults
    ///
    /// When `MEALDROP_CONFIG` is set, the named YAML file is loaded first and
    /// the environment variables override it.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("MEALDROP_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var("MEALDROP_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("MEALDROP_PORT") {
            config.port = port.parse()?;
        }

        Ok(config)
    }

    /// The address to bind, `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
