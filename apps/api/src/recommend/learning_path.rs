//! Learning path derivation.
//!
//! Turns gap-analysis priority skills into an ordered, time-boxed module
//! sequence. Difficulty is a fixed name lookup and resources are synthesized
//! from fixed templates — output compatibility depends on both tables staying
//! exactly as they are, so resist turning them into anything smarter.

use serde::{Deserialize, Serialize};

use crate::catalog::CareerCatalog;
use crate::models::UserProfile;
use crate::recommend::gap::analyze_gap;

const BEGINNER_SKILLS: &[&str] = &["Python", "JavaScript", "HTML", "CSS", "Git"];
const ADVANCED_SKILLS: &[&str] = &["Machine Learning", "Deep Learning", "System Design"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Estimated learning time in weeks.
    pub fn estimated_weeks(self) -> u32 {
        match self {
            Difficulty::Beginner => 8,
            Difficulty::Intermediate => 12,
            Difficulty::Advanced => 16,
        }
    }
}

/// Classifies a skill by the fixed lookup. Everything outside the two known
/// sets defaults to intermediate.
pub fn difficulty_for(skill: &str) -> Difficulty {
    if BEGINNER_SKILLS.contains(&skill) {
        Difficulty::Beginner
    } else if ADVANCED_SKILLS.contains(&skill) {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningModule {
    pub order: u32,
    pub skill: String,
    pub difficulty: Difficulty,
    pub estimated_weeks: u32,
    pub resources: Vec<LearningResource>,
}

/// Three fixed-shape resource entries per skill. The course link templates
/// the skill into a Coursera search with spaces pre-encoded; the docs entry
/// is a placeholder.
pub fn learning_resources(skill: &str) -> Vec<LearningResource> {
    vec![
        LearningResource {
            kind: "Course".to_string(),
            name: format!("{skill} Complete Course"),
            platform: "Coursera".to_string(),
            url: format!(
                "https://www.coursera.org/search?query={}",
                skill.replace(' ', "%20")
            ),
        },
        LearningResource {
            kind: "Documentation".to_string(),
            name: format!("Official {skill} Docs"),
            platform: "Official Website".to_string(),
            url: "#".to_string(),
        },
        LearningResource {
            kind: "Practice".to_string(),
            name: format!("{skill} Exercises"),
            platform: "LeetCode/HackerRank".to_string(),
            url: "https://leetcode.com".to_string(),
        },
    ]
}

/// Builds the learning path for a target career from the gap-analysis
/// priority skills, in order. An unknown career yields an empty path rather
/// than an error — callers that need to distinguish "career missing" from
/// "nothing to learn" must check the catalog separately. Preserved behavior;
/// see the gap-analysis counterpart for the propagating variant.
pub fn build_learning_path(
    profile: &UserProfile,
    target_career: &str,
    catalog: &CareerCatalog,
) -> Vec<LearningModule> {
    let gap = match analyze_gap(profile, target_career, catalog) {
        Ok(gap) => gap,
        Err(_) => return vec![],
    };

    gap.priority_skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| {
            let difficulty = difficulty_for(skill);
            LearningModule {
                order: idx as u32 + 1,
                skill: skill.clone(),
                difficulty,
                estimated_weeks: difficulty.estimated_weeks(),
                resources: learning_resources(skill),
            }
        })
        .collect()
}
