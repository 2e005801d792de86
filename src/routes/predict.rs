//! Symptom risk prediction handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::classifier::RiskTier;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptom: String,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub risk: RiskTier,
    pub advice: &'static str,
}

/// Classify a free-text symptom description.
///
/// Body rejections are converted to `AppError` before the classifier runs.
#[instrument(name = "predict::predict", skip_all)]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(request) = payload?;

    let result = state.classifier.classify(Some(request.symptom.as_str()));

    tracing::debug!(
        symptom = %request.symptom,
        matched = result.matched.as_deref().unwrap_or("-"),
        "Matched keyword"
    );
    tracing::info!(risk = %result.risk, "Classified symptom");

    Ok(Json(PredictResponse {
        risk: result.risk,
        advice: result.advice(),
    }))
}
