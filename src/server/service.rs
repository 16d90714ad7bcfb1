//! Route handlers for the prediction service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::types::{PredictionError, RiskReport};
use crate::{PKG_VERSION, Pipeline};

/// Shared state for request handlers.
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Build the service router.
///
/// CORS is permissive: the service sits behind deployment-level access
/// control and browser frontends call it cross-origin.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run a prediction and choose the transport status.
///
/// Every pipeline failure maps to 500 with the one-key error body; finer
/// status classification is left to deployments that parse the message.
pub fn respond(
    pipeline: &Pipeline,
    payload: &Value,
) -> (StatusCode, Result<RiskReport, PredictionError>) {
    let Some(object) = payload.as_object() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Err(PredictionError::new("request body must be a JSON object")),
        );
    };
    match pipeline.predict(object) {
        Ok(report) => (StatusCode::OK, Ok(report)),
        Err(error) => (StatusCode::INTERNAL_SERVER_ERROR, Err(error)),
    }
}

async fn predict(State(state): State<Arc<AppState>>, Json(payload): Json<Value>) -> Response {
    match respond(&state.pipeline, &payload) {
        (status, Ok(report)) => (status, Json(report)).into_response(),
        (status, Err(error)) => (status, Json(error)).into_response(),
    }
}

/// Service health and loaded-model summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub classifier: String,
    pub classes: usize,
}

/// Describe the loaded pipeline.
pub fn health_response(pipeline: &Pipeline) -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        version: PKG_VERSION.to_string(),
        classifier: pipeline.classifier().name().to_string(),
        classes: pipeline.classifier().labels().len(),
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(health_response(&state.pipeline))
}
