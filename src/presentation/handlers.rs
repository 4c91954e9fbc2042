// HTTP request handlers
use crate::application::dashboard_source::SourceError;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List available dashboards
pub async fn list_dashboards(State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.list_dashboards().await {
        Ok(dashboards) => Json(dashboards).into_response(),
        Err(e) => source_error_response(e),
    }
}

/// Dashboard document endpoint. POST with no required body: the endpoint is
/// a query, not a command.
pub async fn get_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.get_dashboard(&id).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => source_error_response(e),
    }
}

/// Resolved dashboard view: widget descriptors replaced by render models
pub async fn get_dashboard_view(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.get_dashboard_view(&id).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => source_error_response(e),
    }
}

/// Stream a dashboard progressively (skeleton, widgets, completion)
pub async fn stream_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.streaming_service.stream_dashboard(&id).await {
        Ok(rx) => stream_from_receiver(rx).into_response(),
        Err(e) => source_error_response(e),
    }
}

fn source_error_response(err: SourceError) -> Response {
    match err {
        SourceError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("dashboard not found: {id}")})),
        )
            .into_response(),
        SourceError::Upstream(e) => {
            tracing::error!("dashboard source failure: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "internal server error"})),
            )
                .into_response()
        }
    }
}
