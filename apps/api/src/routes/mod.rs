pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::quality::handlers as quality;
use crate::reports::handlers as reports;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quality API
        .route("/api/v1/quality/validate", post(quality::handle_validate))
        // Reports API
        .route("/api/v1/reports", get(reports::handle_list_reports))
        .route("/api/v1/reports/generate", post(generation::handle_generate))
        .route("/api/v1/reports/dashboard", get(reports::handle_dashboard))
        .route("/api/v1/reports/profile", get(reports::handle_profile))
        .route("/api/v1/reports/:id", delete(reports::handle_delete))
        .route("/api/v1/reports/:id/download", get(reports::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use aws_sdk_s3::config::{BehaviorVersion, Region};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::{Generation, LlmError, TextGenerator};

    struct FakeGenerator;

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn complete(&self, model: &str, _prompt: &str) -> Result<Generation, LlmError> {
            Ok(Generation {
                content: "Introduction\nA system.".to_string(),
                model: model.to_string(),
            })
        }
    }

    /// State whose pool never connects; only routes that fail before touching
    /// the database are exercised here.
    fn test_state() -> AppState {
        let config = Config {
            database_url: "postgres://localhost/reportgen_test".to_string(),
            s3_bucket: "reports-test".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            aws_access_key_id: "test".to_string(),
            aws_secret_access_key: "test".to_string(),
            openrouter_api_key: "test".to_string(),
            openrouter_base_url: "http://localhost:1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        };
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();

        AppState {
            db,
            s3: aws_sdk_s3::Client::from_conf(s3_config),
            generator: Arc::new(FakeGenerator),
            config,
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_validate_endpoint_scores_text() {
        let (status, body) = send(post_json(
            "/api/v1/quality/validate",
            json!({
                "raw_text": "Introduction\nThis system provides design and analysis.\nConclusion\nDone."
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 15);
        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["sections"]["conclusion"], "Done. ");
        assert_eq!(body["remarks"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_topic() {
        let (status, body) = send(post_json(
            "/api/v1/reports/generate",
            json!({
                "user_id": Uuid::new_v4(),
                "title": "Untitled",
                "topic": "   ",
                "format": "simple"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Report topic cannot be empty");
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_format() {
        let (status, body) = send(post_json(
            "/api/v1/reports/generate",
            json!({
                "user_id": Uuid::new_v4(),
                "title": "Untitled",
                "topic": "Edge caching",
                "format": "thesis"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("thesis"));
    }

    #[tokio::test]
    async fn test_list_requires_user_id() {
        let request = Request::builder()
            .uri("/api/v1/reports")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
