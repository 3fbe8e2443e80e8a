use crate::core::planner::Planner;
use crate::domain::model::{RecommendRequest, RecommendationResult, ReportRequest, ReportResult};
use crate::utils::error::PlannerError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

pub struct AppState {
    pub planner: Planner,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/recommend", post(recommend_handler))
        .route("/report", post(report_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Every planner failure is a 500 with a `detail` message.
pub struct ApiError(PlannerError);

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed ({:?}): {}", self.0.kind(), self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendationResult>, ApiError> {
    tracing::info!("POST /recommend (task {})", req.current_task.id);
    Ok(Json(state.planner.recommend(&req).await?))
}

pub async fn report_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<ReportResult>, ApiError> {
    tracing::info!("POST /report ({} tasks)", req.tasks.len());
    Ok(Json(state.planner.report(&req).await?))
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
