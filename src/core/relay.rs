use crate::core::extract::extract_json;
use crate::domain::ports::CompletionClient;
use crate::utils::error::{PlannerError, Result};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Builds the prompt, runs the completion call on its own task and hands the
/// reply to the extractor.
#[derive(Clone)]
pub struct CompletionRelay {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl CompletionRelay {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn invoke<P: Serialize + ?Sized>(&self, template: &str, payload: &P) -> Result<Value> {
        let prompt = build_prompt(template, payload)?;
        tracing::debug!("Prompt assembled ({} bytes) for model {}", prompt.len(), self.model);

        let raw = self.dispatch(prompt).await?;
        tracing::debug!("Completion returned {} bytes", raw.len());

        extract_json(&raw).inspect_err(|e| {
            tracing::warn!("Could not extract JSON from completion: {}", e);
        })
    }

    // The request handler only awaits the join handle; dropping it does not
    // abort the spawned call.
    async fn dispatch(&self, prompt: String) -> Result<String> {
        let client = Arc::clone(&self.client);
        let model = self.model.clone();

        let worker = tokio::spawn(async move { client.complete(&model, &prompt).await });

        worker.await.map_err(|e| PlannerError::Worker {
            message: e.to_string(),
        })?
    }
}

/// `template`, a blank line, then the payload as compact JSON. Non-ASCII text
/// is written as-is.
pub fn build_prompt<P: Serialize + ?Sized>(template: &str, payload: &P) -> Result<String> {
    let serialized = serde_json::to_string(payload)?;
    Ok(format!("{}\n\n{}", template, serialized))
}
