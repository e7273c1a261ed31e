use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::jira::Tracker;

/// The intermediary HTTP surface. Bodies are forwarded upstream JSON; the
/// caller never sees upstream error details, only the generic 500 bodies.
pub fn router(tracker: Arc<dyn Tracker>) -> Router {
    Router::new()
        .route("/api/sprints/{id}", get(board_sprints))
        .route("/api/sprint/{id}", get(sprint_issues))
        .layer(CorsLayer::permissive())
        .with_state(tracker)
}

async fn board_sprints(
    State(tracker): State<Arc<dyn Tracker>>,
    Path(board_id): Path<u64>,
) -> Response {
    match tracker.board_sprints(board_id).await {
        Ok(sprints) => Json(sprints).into_response(),
        Err(e) => {
            tracing::error!("sprint fetch failed for board {board_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch sprints" })),
            )
                .into_response()
        }
    }
}

async fn sprint_issues(
    State(tracker): State<Arc<dyn Tracker>>,
    Path(sprint_id): Path<u64>,
) -> Response {
    match tracker.sprint_issues(sprint_id).await {
        Ok(issues) => Json(issues).into_response(),
        Err(e) => {
            tracing::error!("issue fetch failed for sprint {sprint_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch issues" })),
            )
                .into_response()
        }
    }
}
