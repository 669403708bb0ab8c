use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Generated report documents live in `config.s3_bucket`.
    pub s3: S3Client,
    /// Text generation backend. Default: `LlmClient` against OpenRouter.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
