use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use launchdeck_domain::{Launch, LaunchRequest};
use launchdeck_launches::{Planet, ServiceError};

use crate::state::AppState;

type ErrorResponse = (StatusCode, Json<Value>);

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "launch-api",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn list_launches(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Launch>>, ErrorResponse> {
    let launches = state.service.list().map_err(into_error_response)?;
    Ok(Json(launches))
}

pub async fn create_launch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LaunchRequest>,
) -> Result<(StatusCode, Json<Launch>), ErrorResponse> {
    let launch = state.service.schedule(&request).map_err(into_error_response)?;
    Ok((StatusCode::CREATED, Json(launch)))
}

pub async fn abort_launch(
    State(state): State<Arc<AppState>>,
    Path(flight_number): Path<u32>,
) -> Result<Json<Launch>, ErrorResponse> {
    let launch = state
        .service
        .abort(flight_number)
        .map_err(into_error_response)?;
    Ok(Json(launch))
}

pub async fn list_planets(State(state): State<Arc<AppState>>) -> Json<Vec<Planet>> {
    Json(state.service.planets().to_vec())
}

/// Map service failures onto the HTTP contract: validation reasons go to the
/// client verbatim with 400, unknown launches are 404, storage failures are
/// logged and surfaced as an opaque 500.
fn into_error_response(err: ServiceError) -> ErrorResponse {
    match err {
        ServiceError::Validation(reason) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": reason.to_string() })),
        ),
        ServiceError::LaunchNotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Launch not found" })),
        ),
        ServiceError::Storage(source) => {
            error!("Storage failure: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal server error" })),
            )
        }
    }
}
