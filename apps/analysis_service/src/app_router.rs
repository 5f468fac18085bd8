use axum::{routing::get, Router};

use crate::{
    analysis::analysis_controller::analysis_router, health::health_controller,
    pages::page_controller,
};

pub fn application_router() -> Router {
    Router::new()
        .route("/", get(page_controller::index))
        .route("/v1/health", get(health_controller::health))
        .route("/v1/project-details", get(page_controller::project_details))
        .nest("/v1/analysis", analysis_router())
}
