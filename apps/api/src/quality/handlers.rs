//! Stateless quality endpoint: score arbitrary text without generating a report.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::quality::{parse_sections, validate_sections, SectionMap, ValidationStatus};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub sections: SectionMap,
    /// Uncapped validator score.
    pub score: u32,
    pub status: ValidationStatus,
    pub remarks: Vec<String>,
}

/// POST /api/v1/quality/validate
pub async fn handle_validate(
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let sections = parse_sections(&request.raw_text);
    let result = validate_sections(&sections);

    Ok(Json(ValidateResponse {
        sections,
        score: result.score,
        status: result.status,
        remarks: result.remarks,
    }))
}
