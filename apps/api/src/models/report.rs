use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A generated report and the audit metadata recorded alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub topic: String,
    /// Object key of the rendered document in the reports bucket.
    pub s3_key: String,
    pub model_used: String,
    pub prompt_version: String,
    pub created_at: DateTime<Utc>,
    /// Capped at 100.
    pub quality_score: f64,
    pub validation_status: String,
    pub version: i32,
    /// Root report of the topic chain; `None` for version 1.
    pub parent_report_id: Option<Uuid>,
    pub generation_time_ms: i64,
    pub ai_confidence: f64,
}
