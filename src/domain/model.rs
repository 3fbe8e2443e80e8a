use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub position: String,
    pub grade: String,
    #[serde(default)]
    pub project: Option<i64>,
}

/// `state` is a caller-defined ordinal and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub state: i64,
    #[serde(default)]
    pub developer: Option<i64>,
    pub project: i64,
    pub description: String,
    pub name: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// Conventional meaning of the `state` ordinal used by the planning UI.
/// Only used for log output; requests are never validated against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStage {
    New,
    Assigned,
    InProgress,
    CodeReview,
    Testing,
    Fixing,
    Ready,
    Completed,
}

impl TaskStage {
    pub fn from_state(state: i64) -> Option<Self> {
        match state {
            0 => Some(TaskStage::New),
            1 => Some(TaskStage::Assigned),
            2 => Some(TaskStage::InProgress),
            3 => Some(TaskStage::CodeReview),
            4 => Some(TaskStage::Testing),
            5 => Some(TaskStage::Fixing),
            6 => Some(TaskStage::Ready),
            7 => Some(TaskStage::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStage::New => "new",
            TaskStage::Assigned => "assigned",
            TaskStage::InProgress => "in progress",
            TaskStage::CodeReview => "code review",
            TaskStage::Testing => "testing",
            TaskStage::Fixing => "fixing",
            TaskStage::Ready => "ready",
            TaskStage::Completed => "completed",
        }
    }
}

impl Task {
    pub fn stage(&self) -> Option<TaskStage> {
        TaskStage::from_state(self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub developers: Vec<Developer>,
    pub tasks: Vec<Task>,
    pub current_task: Task,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub developers: Vec<Developer>,
    pub tasks: Vec<Task>,
}

/// `developer_id` of `None` means the model found no suitable developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    #[serde(deserialize_with = "whole_number::option")]
    pub developer_id: Option<i64>,
    pub developer_name: String,
    pub estimated_days: f64,
    pub confidence: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskyTask {
    #[serde(deserialize_with = "whole_number::required")]
    pub id: i64,
    pub name: String,
    pub risk: RiskLevel,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperEfficiency {
    #[serde(deserialize_with = "whole_number::required")]
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "whole_number::required")]
    pub completed_tasks: i64,
    #[serde(deserialize_with = "whole_number::required")]
    pub in_progress_tasks: i64,
    pub efficiency: f64,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub completion: f64,
    pub risky_tasks: Vec<RiskyTask>,
    pub developer_efficiency: Vec<DeveloperEfficiency>,
}

/// Model replies write integer fields as any JSON number, so `2.0` is taken
/// as `2`. Anything with a fractional part is still rejected.
mod whole_number {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    fn to_i64<E: Error>(n: &Number) -> Result<i64, E> {
        if let Some(i) = n.as_i64() {
            return Ok(i);
        }
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(f as i64)
            }
            _ => Err(E::custom(format!("expected a whole number, got {}", n))),
        }
    }

    pub fn required<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let n = Number::deserialize(deserializer)?;
        to_i64(&n)
    }

    pub fn option<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Option::<Number>::deserialize(deserializer)?
            .map(|n| to_i64(&n))
            .transpose()
    }
}
