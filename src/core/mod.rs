pub mod extract;
pub mod planner;
pub mod prompts;
pub mod relay;

pub use crate::domain::model::{
    DeveloperEfficiency, RecommendRequest, RecommendationResult, ReportRequest, ReportResult,
    RiskyTask,
};
pub use crate::domain::ports::{CompletionClient, ProviderConfig};
pub use crate::utils::error::Result;
