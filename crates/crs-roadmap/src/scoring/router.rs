use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::Profile;
use super::profile::{ProfileDiff, ScoreBreakdown};
use super::scenario::{Baseline, ImprovementOption, PointRange, Selection};
use super::service::ScoringService;
use super::ScoringError;
use crate::error::AppError;

/// Router builder exposing the scorer and scenario estimator over HTTP.
pub fn scoring_router(service: Arc<ScoringService>) -> Router {
    Router::new()
        .route("/api/v1/crs/score", post(score_handler))
        .route("/api/v1/crs/diff", post(diff_handler))
        .route("/api/v1/scenarios/improvements", post(improvements_handler))
        .route("/api/v1/scenarios/project", post(project_handler))
        .route("/api/v1/scenarios/estimate", post(estimate_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiffRequest {
    pub(crate) from: Profile,
    pub(crate) to: Profile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRequest {
    pub(crate) baseline: Baseline,
    #[serde(default)]
    pub(crate) selected: Selection,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImprovementsResponse {
    pub(crate) items: Vec<ImprovementOption>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub(crate) crs: u16,
}

// Decoding by hand keeps out-of-domain values on the InvalidInput path instead of axum's
// generic rejection.
fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ScoringError> {
    serde_json::from_value(payload).map_err(|err| ScoringError::invalid(err.to_string()))
}

pub(crate) async fn score_handler(
    State(service): State<Arc<ScoringService>>,
    Json(payload): Json<Value>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let profile: Profile = decode(payload)?;
    Ok(Json(service.score(&profile)))
}

pub(crate) async fn diff_handler(
    State(service): State<Arc<ScoringService>>,
    Json(payload): Json<Value>,
) -> Result<Json<ProfileDiff>, AppError> {
    let DiffRequest { from, to } = decode(payload)?;
    Ok(Json(service.diff(&from, &to)))
}

pub(crate) async fn improvements_handler(
    State(service): State<Arc<ScoringService>>,
    Json(payload): Json<Value>,
) -> Result<Json<ImprovementsResponse>, AppError> {
    let baseline: Baseline = decode(payload)?;
    Ok(Json(ImprovementsResponse {
        items: service.improvements(&baseline),
    }))
}

pub(crate) async fn project_handler(
    State(service): State<Arc<ScoringService>>,
    Json(payload): Json<Value>,
) -> Result<Json<PointRange>, AppError> {
    let ProjectRequest { baseline, selected } = decode(payload)?;
    Ok(Json(service.project(&baseline, &selected)))
}

pub(crate) async fn estimate_handler(
    State(service): State<Arc<ScoringService>>,
    Json(payload): Json<Value>,
) -> Result<Json<EstimateResponse>, AppError> {
    let baseline: Baseline = decode(payload)?;
    Ok(Json(EstimateResponse {
        crs: service.quick_estimate(&baseline),
    }))
}
