//! Report Generation: orchestrates the full generation pipeline.
//!
//! Flow: validate request → resolve topic version → load prompt → LLM generate (timed) →
//!       assess quality → render document → upload to S3 → persist row → return response.

use std::time::Instant;

use aws_sdk_s3::Client as S3Client;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::get_user;
use crate::errors::AppError;
use crate::generation::formats::ReportFormat;
use crate::generation::prompts::load_prompt;
use crate::llm_client::TextGenerator;
use crate::models::report::ReportRow;
use crate::models::user::User;
use crate::quality::{
    ai_confidence, cap_quality_score, parse_sections, validate_sections, SectionMap,
    ValidationStatus,
};
use crate::render::{render_report_document, DocumentMetadata, RenderInput};
use crate::reports::storage::{delete_document, document_key, upload_document};
use crate::reports::versioning::{
    insert_report, is_version_conflict, latest_for_topic, next_version, reslot,
};

/// Inserts retried after losing a version race before giving up.
const MAX_INSERT_ATTEMPTS: u32 = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for report generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub user_id: Uuid,
    pub title: String,
    pub topic: String,
    pub format: String,
}

/// Quality metrics derived from one piece of generated text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAssessment {
    pub sections: SectionMap,
    /// Validator score before the 100 cap.
    pub raw_score: u32,
    /// Persisted score, capped at 100.
    pub quality_score: u32,
    /// Derived from `raw_score`, not from the capped value.
    pub validation_status: ValidationStatus,
    pub ai_confidence: f64,
    pub remarks: Vec<String>,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub report: ReportRow,
    pub remarks: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Scores generated text: parse → validate → cap → confidence.
pub fn assess_content(content: &str) -> QualityAssessment {
    let sections = parse_sections(content);
    let result = validate_sections(&sections);
    let quality_score = cap_quality_score(result.score);

    QualityAssessment {
        sections,
        raw_score: result.score,
        quality_score,
        validation_status: result.status,
        ai_confidence: ai_confidence(quality_score),
        remarks: result.remarks,
    }
}

/// Everything needed to draft one report, with the database lookups already done.
#[derive(Debug, Clone, Copy)]
pub struct DraftInput<'a> {
    pub author: &'a User,
    pub title: &'a str,
    /// Stored and used as the versioning key exactly as the user sent it.
    pub topic: &'a str,
    pub format: ReportFormat,
    /// Latest report of `author` on `topic`, if any.
    pub latest: Option<&'a ReportRow>,
}

/// A report row and its rendered document, ready to upload and insert.
#[derive(Debug, Clone)]
pub struct DraftReport {
    pub report: ReportRow,
    pub document: String,
    pub remarks: Vec<String>,
}

/// Generates and scores a report without touching storage.
///
/// Steps:
/// 1. Resolve version/parent from `input.latest`
/// 2. Prompt + LLM call, timed in milliseconds
/// 3. assess_content() → QualityAssessment
/// 4. Render the document and build the row (capped score, uncapped status)
pub async fn draft_report(
    generator: &dyn TextGenerator,
    input: DraftInput<'_>,
) -> Result<DraftReport, AppError> {
    let DraftInput {
        author,
        title,
        topic,
        format,
        latest,
    } = input;

    // Step 1: Versioning
    let slot = next_version(latest);
    info!(
        "Generating '{}' v{} ({}) for user {}",
        topic, slot.version, format, author.id
    );

    // Step 2: Generate
    let (prompt, prompt_version) = load_prompt(format, topic);
    let model_used = format.model();
    let started = Instant::now();
    let generation = generator
        .complete(model_used, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Report generation failed: {e}")))?;
    let generation_time_ms = i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX);

    // Step 3: Quality
    let assessment = assess_content(&generation.content);
    info!(
        "Quality {} (raw {}) {}, {} answered in {}ms",
        assessment.quality_score,
        assessment.raw_score,
        assessment.validation_status,
        generation.model,
        generation_time_ms
    );

    // Step 4: Render + row
    let generated_at = Utc::now();
    let document = render_report_document(&RenderInput {
        format,
        title,
        content: &generation.content,
        author_email: &author.email,
        metadata: DocumentMetadata {
            model_used,
            prompt_version,
            quality_score: assessment.quality_score,
            validation_status: assessment.validation_status,
            ai_confidence: assessment.ai_confidence,
            generation_time_ms,
            generated_at,
        },
    });

    let report = ReportRow {
        id: Uuid::new_v4(),
        user_id: author.id,
        title: title.to_string(),
        topic: topic.to_string(),
        s3_key: document_key(author.id, generated_at),
        model_used: model_used.to_string(),
        prompt_version: prompt_version.to_string(),
        created_at: generated_at,
        quality_score: f64::from(assessment.quality_score),
        validation_status: assessment.validation_status.to_string(),
        version: slot.version,
        parent_report_id: slot.parent_report_id,
        generation_time_ms,
        ai_confidence: assessment.ai_confidence,
    };

    Ok(DraftReport {
        report,
        document,
        remarks: assessment.remarks,
    })
}

/// Runs the full report generation pipeline and persists the result.
///
/// Validates the request, loads the author and the latest report on the topic,
/// drafts the report, uploads the document, then inserts the row. A failed insert
/// removes the uploaded document again.
pub async fn generate_report(
    pool: &PgPool,
    s3: &S3Client,
    s3_bucket: &str,
    generator: &dyn TextGenerator,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation(
            "Report topic cannot be empty".to_string(),
        ));
    }
    let format: ReportFormat = request.format.parse()?;

    let user = get_user(pool, request.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;

    let latest = latest_for_topic(pool, user.id, &request.topic).await?;

    let DraftReport {
        mut report,
        document,
        remarks,
    } = draft_report(
        generator,
        DraftInput {
            author: &user,
            title: &request.title,
            topic: &request.topic,
            format,
            latest: latest.as_ref(),
        },
    )
    .await?;

    upload_document(s3, s3_bucket, &report.s3_key, document).await?;

    if let Err(e) = persist_report(pool, &mut report).await {
        if let Err(cleanup) = delete_document(s3, s3_bucket, &report.s3_key).await {
            warn!("Could not remove orphaned document {}: {cleanup}", report.s3_key);
        }
        return Err(e.into());
    }

    info!(
        "Stored report {} v{} for user {}",
        report.id, report.version, report.user_id
    );

    Ok(GenerateResponse { report, remarks })
}

/// Inserts the row, taking the next free version when a concurrent request
/// claimed the same `(user_id, topic, version)` first.
async fn persist_report(pool: &PgPool, report: &mut ReportRow) -> Result<(), sqlx::Error> {
    let mut attempt = 1;
    loop {
        match insert_report(pool, report).await {
            Err(e) if is_version_conflict(&e) && attempt < MAX_INSERT_ATTEMPTS => {
                warn!(
                    "Version {} of '{}' already taken, re-slotting (attempt {attempt})",
                    report.version, report.topic
                );
                let latest = latest_for_topic(pool, report.user_id, &report.topic).await?;
                reslot(report, latest.as_ref());
                attempt += 1;
            }
            result => return result,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
