use super::toml_config::TomlConfig;
use super::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Anything left unset falls back to the config file,
/// then to the built-in defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "team-planner")]
#[command(about = "Relays team planning data to an LLM and returns structured suggestions")]
pub struct CliArgs {
    #[arg(long, env = "TEAM_PLANNER_CONFIG", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "TEAM_PLANNER_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "TEAM_PLANNER_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "GROQ_MODEL")]
    pub model: Option<String>,

    #[arg(long, env = "GROQ_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Timeout for the outbound completion request, in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliArgs {
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file {}", path.display());
            settings.apply_file(TomlConfig::from_file(path)?);
        }

        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = api_key.clone();
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if self.timeout_seconds.is_some() {
            settings.timeout_seconds = self.timeout_seconds;
        }

        Ok(settings)
    }
}
