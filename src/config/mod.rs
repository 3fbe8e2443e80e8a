#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ProviderConfig;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use std::net::SocketAddr;
use toml_config::TomlConfig;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl Settings {
    /// Overlays every value present in the file.
    pub fn apply_file(&mut self, file: TomlConfig) {
        let TomlConfig { server, provider } = file;
        if let Some(host) = server.host {
            self.host = host;
        }
        if let Some(port) = server.port {
            self.port = port;
        }
        if let Some(api_key) = provider.api_key {
            self.api_key = api_key;
        }
        if let Some(model) = provider.model {
            self.model = model;
        }
        if let Some(base_url) = provider.base_url {
            self.base_url = base_url;
        }
        if provider.timeout_seconds.is_some() {
            self.timeout_seconds = provider.timeout_seconds;
        }
    }

    /// Resolves `host` (IP literal or hostname such as `localhost`) and
    /// `port` to the first matching socket address.
    pub async fn resolve_addr(&self) -> Result<SocketAddr> {
        let invalid = |reason: String| PlannerError::InvalidConfigValue {
            field: "host".to_string(),
            value: self.host.clone(),
            reason,
        };

        let mut addrs = tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| invalid(e.to_string()))?;

        addrs
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}

impl ProviderConfig for Settings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(PlannerError::MissingConfig {
                field: "api_key (GROQ_API_KEY)".to_string(),
            });
        }
        validate_non_empty_string("model", &self.model)?;
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("port", u64::from(self.port), 1)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        validate_non_empty_string("host", &self.host)?;
        Ok(())
    }
}
