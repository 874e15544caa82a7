use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::CareerProfile;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CareerListQuery {
    /// Optional skill filter: only careers mentioning this skill are returned.
    pub skill: Option<String>,
}

#[derive(Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<String>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct CareerDetailResponse {
    pub career: String,
    pub details: CareerProfile,
}

/// GET /careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(params): Query<CareerListQuery>,
) -> Json<CareerListResponse> {
    let careers = match params.skill.as_deref() {
        Some(skill) => state.catalog.search_by_skill(skill),
        None => state.catalog.names(),
    };
    let total = careers.len();
    Json(CareerListResponse { careers, total })
}

/// GET /careers/:career_name
pub async fn handle_career_detail(
    State(state): State<AppState>,
    Path(career_name): Path<String>,
) -> Result<Json<CareerDetailResponse>, AppError> {
    let details = state
        .catalog
        .get(&career_name)
        .ok_or_else(|| AppError::NotFound(format!("Career '{career_name}' not found")))?;

    Ok(Json(CareerDetailResponse {
        career: career_name,
        details: details.clone(),
    }))
}
