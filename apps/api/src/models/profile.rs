use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Student profile submitted with every scoring request.
///
/// Nothing is persisted between calls; the boundary validates field shapes
/// here before the profile ever reaches the engine. Skill strings keep their
/// submitted casing — comparisons downstream are done on case-folded keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub education_level: String,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub experience_years: Option<u32>,
}

impl UserProfile {
    /// Field-level validation applied at the request boundary.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.skills.is_empty() {
            return Err(AppError::Validation(
                "skills must contain at least one entry".to_string(),
            ));
        }
        if self.skills.iter().all(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "skills must contain at least one non-blank entry".to_string(),
            ));
        }
        if let Some(gpa) = self.gpa {
            if !(0.0..=4.0).contains(&gpa) {
                return Err(AppError::Validation(
                    "gpa must be between 0.0 and 4.0".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Years of experience with the documented default of 0.
    pub fn experience_years(&self) -> u32 {
        self.experience_years.unwrap_or(0)
    }
}
