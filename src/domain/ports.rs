use crate::utils::error::Result;
use async_trait::async_trait;

/// A single-turn text completion against an external model.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as one user-role message to `model` and returns the
    /// text content of the first choice.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;
}

pub trait ProviderConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn model(&self) -> &str;
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
