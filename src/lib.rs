pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use crate::adapters::{groq::GroqClient, http::AppState};
pub use crate::config::Settings;
pub use crate::core::{extract::extract_json, planner::Planner, relay::CompletionRelay};
pub use crate::utils::error::{ErrorKind, PlannerError, Result};
