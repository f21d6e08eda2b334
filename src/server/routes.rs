//! Route handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::error::{ApiError, ErrorBody, Operation};
use super::state::AppState;
use crate::{
    ContentOptimizationRequest, ContentOptimizationResponse, HealthResponse, ModelsResponse,
    TextAnalysisRequest, TextAnalysisResponse,
};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.gateway.health())
}

pub async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<TextAnalysisRequest>, JsonRejection>,
) -> Result<Json<TextAnalysisResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::rejected(Operation::Analyze, e))?;
    state
        .gateway
        .analyze_text(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed(Operation::Analyze, e))
}

pub async fn optimize_content(
    State(state): State<AppState>,
    payload: Result<Json<ContentOptimizationRequest>, JsonRejection>,
) -> Result<Json<ContentOptimizationResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::rejected(Operation::Optimize, e))?;
    state
        .gateway
        .optimize_content(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed(Operation::Optimize, e))
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(state.gateway.list_models())
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Not Found".to_string(),
        }),
    )
}
