use sqlx::PgPool;
use uuid::Uuid;

use crate::models::report::ReportRow;

/// Version slot for a new report on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextVersion {
    pub version: i32,
    pub parent_report_id: Option<Uuid>,
}

/// Derives the version of a new report from the latest one on the same topic.
///
/// Every report in a chain points at the chain's first report, so the parent is
/// inherited from `latest` when it has one and is `latest` itself otherwise.
pub fn next_version(latest: Option<&ReportRow>) -> NextVersion {
    match latest {
        Some(report) => NextVersion {
            version: report.version + 1,
            parent_report_id: report.parent_report_id.or(Some(report.id)),
        },
        None => NextVersion {
            version: 1,
            parent_report_id: None,
        },
    }
}

/// Moves an unsaved report onto the slot after `latest`, used when another request
/// inserted the same `(user_id, topic, version)` first.
pub fn reslot(report: &mut ReportRow, latest: Option<&ReportRow>) {
    let slot = next_version(latest);
    report.version = slot.version;
    report.parent_report_id = slot.parent_report_id;
}

/// True when an insert hit `UNIQUE (user_id, topic, version)`.
pub fn is_version_conflict(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Highest-versioned report the user generated for exactly this topic.
pub async fn latest_for_topic(
    pool: &PgPool,
    user_id: Uuid,
    topic: &str,
) -> Result<Option<ReportRow>, sqlx::Error> {
    sqlx::query_as::<_, ReportRow>(
        "SELECT * FROM reports WHERE user_id = $1 AND topic = $2 ORDER BY version DESC LIMIT 1",
    )
    .bind(user_id)
    .bind(topic)
    .fetch_optional(pool)
    .await
}

/// All reports of a user, oldest first.
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ReportRow>, sqlx::Error> {
    sqlx::query_as::<_, ReportRow>(
        "SELECT * FROM reports WHERE user_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_report(pool: &PgPool, report_id: Uuid) -> Result<Option<ReportRow>, sqlx::Error> {
    sqlx::query_as::<_, ReportRow>("SELECT * FROM reports WHERE id = $1")
        .bind(report_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_report(pool: &PgPool, report: &ReportRow) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO reports
            (id, user_id, title, topic, s3_key, model_used, prompt_version, created_at,
             quality_score, validation_status, version, parent_report_id,
             generation_time_ms, ai_confidence)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(report.id)
    .bind(report.user_id)
    .bind(&report.title)
    .bind(&report.topic)
    .bind(&report.s3_key)
    .bind(&report.model_used)
    .bind(&report.prompt_version)
    .bind(report.created_at)
    .bind(report.quality_score)
    .bind(&report.validation_status)
    .bind(report.version)
    .bind(report.parent_report_id)
    .bind(report.generation_time_ms)
    .bind(report.ai_confidence)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_report(pool: &PgPool, report_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM reports WHERE id = $1")
        .bind(report_id)
        .execute(pool)
        .await?;
    Ok(())
}
