use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

const DEFAULT_PROJECT_DETAILS_PATH: &str = "PROJECT_DETAILS.md";

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Feeds the page's "How it Works & Project Details" expander. A missing
/// file is not an error; the page shows the placeholder text instead.
pub async fn project_details() -> impl IntoResponse {
    let path = std::env::var("PROJECT_DETAILS_PATH")
        .unwrap_or_else(|_| DEFAULT_PROJECT_DETAILS_PATH.to_string());

    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => (StatusCode::OK, Json(serde_json::json!({ "details": contents }))),
        Err(error) => {
            tracing::debug!(path = %path, error = %error, "project details file not readable");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "details": "Project details file not found." })),
            )
        }
    }
}
