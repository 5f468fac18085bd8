use axum::{http::StatusCode, response::IntoResponse, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};

use super::report::RiskLevel;
use crate::app_module::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeMessageRequest {
    pub message: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeMessageResponse {
    pub analysis_id: String,
    pub risk_level: RiskLevel,
    pub manipulation_techniques: Vec<String>,
    pub explanation: String,
    pub user_guidance: Vec<String>,
    pub demo_mode: bool,
    pub notice: Option<String>,
}

pub fn analysis_router() -> axum::Router {
    Router::new()
        .route("/execute", post(execute_analysis))
        .with_state(())
}

pub async fn execute_analysis(
    Extension(ctx): Extension<AppState>,
    Json(request): Json<AnalyzeMessageRequest>,
) -> impl IntoResponse {
    let message = request.message.trim();
    if message.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "error": "Please enter a message to analyze."
            })),
        );
    }

    let api_key = resolve_api_key(
        std::env::var("GEMINI_API_KEY").ok(),
        request.api_key.as_deref(),
    );

    let outcome = ctx
        .service
        .analysis_service
        .analyze_message(api_key, message)
        .await;

    let response = AnalyzeMessageResponse {
        analysis_id: outcome.analysis_id,
        risk_level: outcome.report.risk_level,
        manipulation_techniques: outcome.report.manipulation_techniques,
        explanation: outcome.report.explanation,
        user_guidance: outcome.report.user_guidance.into_steps(),
        demo_mode: outcome.demo_mode,
        notice: outcome.notice,
    };

    match serde_json::to_value(response) {
        Ok(json_value) => (StatusCode::OK, Json(json_value)),
        Err(e) => {
            tracing::error!("Error serializing response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to serialize response: {}", e)
                })),
            )
        }
    }
}

/// The configured key wins; the request's key is only consulted when the
/// server has none. Neither is ever logged.
fn resolve_api_key(env_key: Option<String>, request_key: Option<&str>) -> Option<String> {
    env_key.filter(|key| !key.trim().is_empty()).or_else(|| {
        request_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_module::AppState;
    use axum::{body::Body, http::Request};
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        Router::new()
            .nest("/v1/analysis", analysis_router())
            .layer(Extension(AppState::new()))
    }

    #[test]
    fn configured_key_wins_over_request_key() {
        let key = resolve_api_key(Some("server-key".to_string()), Some("client-key"));
        assert_eq!(key.as_deref(), Some("server-key"));
    }

    #[test]
    fn request_key_is_used_when_none_is_configured() {
        let key = resolve_api_key(None, Some(" client-key "));
        assert_eq!(key.as_deref(), Some("client-key"));

        let key = resolve_api_key(Some("   ".to_string()), Some("client-key"));
        assert_eq!(key.as_deref(), Some("client-key"));
    }

    #[test]
    fn blank_keys_resolve_to_none() {
        assert!(resolve_api_key(None, None).is_none());
        assert!(resolve_api_key(Some(String::new()), Some("   ")).is_none());
    }

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_analysis() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/analysis/execute")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message": "   \n  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn keyless_request_still_renders_via_the_demo_analysis() {
        std::env::remove_var("GEMINI_API_KEY");

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/analysis/execute")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message": "URGENT: your account is locked"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
