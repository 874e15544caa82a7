pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::extractor::handlers as extractor_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

/// Resume uploads are capped at 200MB, matching the dashboard's limit.
const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Extraction
        .route(
            "/parse-resume",
            post(extractor_handlers::handle_parse_resume),
        )
        .route(
            "/test-skill-extraction",
            post(extractor_handlers::handle_test_extraction),
        )
        // Recommendation engine
        .route(
            "/recommend-careers",
            post(recommend_handlers::handle_recommend),
        )
        .route(
            "/skills-gap-analysis",
            post(recommend_handlers::handle_skills_gap),
        )
        .route(
            "/learning-path",
            post(recommend_handlers::handle_learning_path),
        )
        // Catalog
        .route("/careers", get(catalog_handlers::handle_list_careers))
        .route(
            "/careers/:career_name",
            get(catalog_handlers::handle_career_detail),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
