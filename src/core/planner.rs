use crate::core::prompts::{RECOMMEND_PROMPT, REPORT_PROMPT};
use crate::core::relay::CompletionRelay;
use crate::domain::model::{RecommendRequest, RecommendationResult, ReportRequest, ReportResult};
use crate::utils::error::{PlannerError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Entry points for the two request flows. Neither adds logic of its own:
/// the whole request goes to the relay and the reply is coerced into the
/// result record.
#[derive(Clone)]
pub struct Planner {
    relay: CompletionRelay,
}

impl Planner {
    pub fn new(relay: CompletionRelay) -> Self {
        Self { relay }
    }

    pub async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResult> {
        let current = &request.current_task;
        tracing::info!(
            "Recommending developer for task {} ({}) among {} developers via {}",
            current.id,
            current.stage().map(|s| s.label()).unwrap_or("unknown stage"),
            request.developers.len(),
            self.relay.model()
        );

        let value = self.relay.invoke(RECOMMEND_PROMPT, request).await?;
        coerce(value)
    }

    pub async fn report(&self, request: &ReportRequest) -> Result<ReportResult> {
        tracing::info!(
            "Building report over {} tasks and {} developers via {}",
            request.tasks.len(),
            request.developers.len(),
            self.relay.model()
        );

        let value = self.relay.invoke(REPORT_PROMPT, request).await?;
        coerce(value)
    }
}

fn coerce<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| {
        tracing::warn!("Model reply does not fit the response schema: {}", source);
        PlannerError::ResponseSchema { source }
    })
}
