use serde::Deserialize;

use crate::server_service::DEFAULT_STOP_TIMEOUT_SECS;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Engine label filter a container must match to be listed (`key` or `key=value`).
    #[serde(default = "default_label")]
    pub label: String,
    /// Label key holding the server type, read verbatim.
    #[serde(default = "default_type_label")]
    pub type_label: String,
}

fn default_label() -> String {
    "mc.platform=true".into()
}

fn default_type_label() -> String {
    "mc.type".into()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            type_label: default_type_label(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LifecycleConfig {
    /// Grace period used when a stop request does not name one.
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: u32,
}

fn default_stop_timeout_secs() -> u32 {
    DEFAULT_STOP_TIMEOUT_SECS
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            stop_timeout_secs: default_stop_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.discovery.label.trim().is_empty(),
            "discovery.label must be non-empty"
        );
        anyhow::ensure!(
            !self.discovery.type_label.trim().is_empty(),
            "discovery.type_label must be non-empty"
        );
        Ok(())
    }
}
