//! Axum route handler for the Generation API.

use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_report, GenerateRequest, GenerateResponse};
use crate::state::AppState;

/// POST /api/v1/reports/generate
///
/// Generates, scores, renders and stores a report. Responds 201 with the stored
/// row and the validator remarks.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), AppError> {
    let response = generate_report(
        &state.db,
        &state.s3,
        &state.config.s3_bucket,
        state.generator.as_ref(),
        request,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}
