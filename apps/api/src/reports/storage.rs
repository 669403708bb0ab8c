use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

pub const DOCUMENT_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// `reports/{user}/generated_report_{user}_{YYYYmmdd_HHMMSS}.md`
pub fn document_key(user_id: Uuid, generated_at: DateTime<Utc>) -> String {
    format!(
        "reports/{user_id}/generated_report_{user_id}_{}.md",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Final path segment of an object key, used as the download filename.
pub fn file_name(s3_key: &str) -> &str {
    s3_key.rsplit('/').next().unwrap_or(s3_key)
}

pub async fn upload_document(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    document: String,
) -> Result<(), AppError> {
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(document.into_bytes()))
        .content_type(DOCUMENT_CONTENT_TYPE)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("upload of {key} failed: {e}")))?;

    info!("Uploaded report document to s3://{}/{}", bucket, key);
    Ok(())
}

pub async fn download_document(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<Bytes, AppError> {
    let object = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("download of {key} failed: {e}")))?;

    let data = object
        .body
        .collect()
        .await
        .map_err(|e| AppError::S3(format!("reading {key} failed: {e}")))?;

    Ok(data.into_bytes())
}

/// Succeeds when the object is already gone.
pub async fn delete_document(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<(), AppError> {
    s3.delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("delete of {key} failed: {e}")))?;

    info!("Deleted report document s3://{}/{}", bucket, key);
    Ok(())
}
