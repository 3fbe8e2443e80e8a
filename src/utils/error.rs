use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model returned no JSON object: {text}")]
    NoJsonFound { text: String },

    #[error("model returned invalid JSON: {text}")]
    InvalidJson {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model JSON does not match the response schema: {source}")]
    ResponseSchema {
        #[source]
        source: serde_json::Error,
    },

    #[error("completion request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("malformed completion response: {message}")]
    MalformedUpstream { message: String },

    #[error("completion worker failed: {message}")]
    Worker { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

/// Coarse classification used by callers that need to branch on the failure
/// without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyResponse,
    NoJsonFound,
    InvalidJson,
    ResponseSchema,
    Upstream,
    Internal,
    Config,
}

impl PlannerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlannerError::EmptyResponse => ErrorKind::EmptyResponse,
            PlannerError::NoJsonFound { .. } => ErrorKind::NoJsonFound,
            PlannerError::InvalidJson { .. } => ErrorKind::InvalidJson,
            PlannerError::ResponseSchema { .. } => ErrorKind::ResponseSchema,
            PlannerError::Upstream(_)
            | PlannerError::UpstreamStatus { .. }
            | PlannerError::MalformedUpstream { .. } => ErrorKind::Upstream,
            PlannerError::Worker { .. }
            | PlannerError::SerializationError(_)
            | PlannerError::IoError(_) => ErrorKind::Internal,
            PlannerError::ConfigError { .. }
            | PlannerError::InvalidConfigValue { .. }
            | PlannerError::MissingConfig { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
