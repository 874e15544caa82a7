use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Service banner with the endpoint map.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Career Mentor API - Ready to guide your career journey!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "parse_resume": "/parse-resume",
            "recommend": "/recommend-careers",
            "skills_gap": "/skills-gap-analysis",
            "learning_path": "/learning-path",
            "careers": "/careers"
        }
    }))
}

/// GET /health
/// Detailed health check including how many careers are loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "careers_loaded": state.catalog.len(),
        "api_version": env!("CARGO_PKG_VERSION")
    }))
}
