use axum::{extract::State, response::Json};
use tracing::info;

use crate::{
    error::AppError,
    models::{AnalyzeRequest, AnalyzeResponse},
    server::AppState,
};

use super::run_analysis;

/// Analyze source code
///
/// Runs the lexical, structural and convention passes and returns all three
/// results.
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Code analyzed", body = AnalyzeResponse),
        (status = 413, description = "Code exceeds the configured size limit")
    )
)]
pub async fn analyze_code(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis = run_analysis(&state, payload.code).await?;
    info!(
        tokens = analysis.lexical.len(),
        valid = analysis.is_clean(),
        "API analysis served"
    );
    Ok(Json(AnalyzeResponse::from(analysis)))
}
