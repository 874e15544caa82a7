use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::recommend::gap::{analyze_gap, GapAnalysis};
use crate::recommend::learning_path::{build_learning_path, LearningModule};
use crate::recommend::scoring::{recommend, CareerMatch, DEFAULT_TOP_N};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TargetCareerQuery {
    pub target_career: String,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub target_career: String,
    pub learning_path: Vec<LearningModule>,
    pub total_weeks: u32,
    pub total_skills: usize,
}

/// POST /recommend-careers
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<Vec<CareerMatch>>, AppError> {
    profile.validate()?;
    let results = recommend(&profile, &state.catalog, DEFAULT_TOP_N);
    debug!(
        skills = profile.skills.len(),
        results = results.len(),
        "scored recommendation request"
    );
    Ok(Json(results))
}

/// POST /skills-gap-analysis?target_career=...
pub async fn handle_skills_gap(
    State(state): State<AppState>,
    Query(params): Query<TargetCareerQuery>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<GapAnalysis>, AppError> {
    profile.validate()?;
    let analysis = analyze_gap(&profile, &params.target_career, &state.catalog)?;
    Ok(Json(analysis))
}

/// POST /learning-path?target_career=...
///
/// The path builder swallows unknown careers into an empty path; the original
/// request layer folded both that case and "nothing left to learn" into one
/// 404, and that behavior is kept for compatibility.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    Query(params): Query<TargetCareerQuery>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<LearningPathResponse>, AppError> {
    profile.validate()?;
    let learning_path = build_learning_path(&profile, &params.target_career, &state.catalog);

    if learning_path.is_empty() {
        return Err(AppError::NotFound(
            "Career not found or no learning path needed".to_string(),
        ));
    }

    let total_weeks = learning_path.iter().map(|m| m.estimated_weeks).sum();
    let total_skills = learning_path.len();

    Ok(Json(LearningPathResponse {
        target_career: params.target_career,
        learning_path,
        total_weeks,
        total_skills,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CareerCatalog;

    fn profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: vec![],
            education_level: "Bachelor's".to_string(),
            gpa: None,
            experience_years: None,
        }
    }

    #[test]
    fn test_total_weeks_matches_module_sum() {
        let catalog = CareerCatalog::builtin();
        let path = build_learning_path(&profile(&["Nothing Relevant"]), "Data Scientist", &catalog);
        let total_weeks: u32 = path.iter().map(|m| m.estimated_weeks).sum();

        // Python (8) + Machine Learning (16) + Statistics (12)
        // + TensorFlow (12) + PyTorch (12)
        assert_eq!(total_weeks, 60);
        assert_eq!(path.len(), 5);
    }
}
