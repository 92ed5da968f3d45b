use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Absent and empty are treated the same: both are missing input.
    #[serde(default)]
    pub sermon_text: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if payload.sermon_text.trim().is_empty() {
        return Err(AppError::MissingInput);
    }

    tracing::info!(
        sermon_len = payload.sermon_text.len(),
        "Analyzing sermon text"
    );

    let analysis = state
        .provider
        .analyze(&payload.sermon_text)
        .await
        .map_err(|e| {
            tracing::error!("Sermon analysis failed: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(AnalyzeResponse { analysis }))
}
