//! Axum route handlers for report history: listing, stats, download and delete.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::report::ReportRow;
use crate::reports::stats::{
    compute_dashboard_stats, compute_profile_stats, DashboardStats, ProfileStats,
};
use crate::reports::storage::{delete_document, download_document, file_name, DOCUMENT_CONTENT_TYPE};
use crate::reports::versioning::{delete_report, get_report, list_for_user};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Loads a report and checks that `user_id` owns it.
async fn owned_report(
    state: &AppState,
    report_id: Uuid,
    user_id: Uuid,
) -> Result<ReportRow, AppError> {
    let report = get_report(&state.db, report_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {report_id} not found")))?;
    ensure_owner(&report, user_id)?;
    Ok(report)
}

fn ensure_owner(report: &ReportRow, user_id: Uuid) -> Result<(), AppError> {
    if report.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// GET /api/v1/reports
pub async fn handle_list_reports(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ReportRow>>, AppError> {
    Ok(Json(list_for_user(&state.db, params.user_id).await?))
}

/// GET /api/v1/reports/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let reports = list_for_user(&state.db, params.user_id).await?;
    Ok(Json(compute_dashboard_stats(&reports)))
}

/// GET /api/v1/reports/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileStats>, AppError> {
    let reports = list_for_user(&state.db, params.user_id).await?;
    Ok(Json(compute_profile_stats(&reports)))
}

/// GET /api/v1/reports/:id/download
///
/// Streams the rendered document back as an attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let report = owned_report(&state, report_id, params.user_id).await?;
    let body = download_document(&state.s3, &state.config.s3_bucket, &report.s3_key).await?;

    let disposition = format!("attachment; filename=\"{}\"", file_name(&report.s3_key));
    Ok((
        [
            (header::CONTENT_TYPE, DOCUMENT_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// DELETE /api/v1/reports/:id
///
/// Removes the stored document first, then the row.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let report = owned_report(&state, report_id, params.user_id).await?;
    delete_document(&state.s3, &state.config.s3_bucket, &report.s3_key).await?;
    delete_report(&state.db, report.id).await?;

    info!("Deleted report {} for user {}", report.id, params.user_id);
    Ok(StatusCode::NO_CONTENT)
}
