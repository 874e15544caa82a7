//! Career match scoring.
//!
//! Per-career score = skill match (0-70 required + 0-30 nice-to-have)
//! + interest boost (capped at 10) + experience boost (step function),
//! clamped to [0, 100]. Deterministic and allocation-light; the same profile
//! against the same catalog always produces byte-identical output.

use serde::{Deserialize, Serialize};

use crate::catalog::CareerCatalog;
use crate::models::UserProfile;
use crate::recommend::{lower_set, round2};

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 10;

/// One scored career, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career: String,
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub skills_to_learn: Vec<String>,
    pub description: String,
    pub salary_info: String,
    pub growth_outlook: String,
}

/// Weighted set-overlap score: required skills carry 70 points, nice-to-have
/// skills the remaining 30. A career with no nice-to-have entries cannot earn
/// those 30 points from any source — deliberate policy, do not "fix".
pub fn skill_match_score(user_skills: &[String], required: &[String], nice: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let user_lower = lower_set(user_skills);
    let required_lower = lower_set(required);
    let nice_lower = lower_set(nice);

    let required_matches = required_lower.intersection(&user_lower).count();
    let required_score = (required_matches as f64 / required_lower.len() as f64) * 70.0;

    let nice_score = if nice_lower.is_empty() {
        0.0
    } else {
        let nice_matches = nice_lower.intersection(&user_lower).count();
        (nice_matches as f64 / nice_lower.len() as f64) * 30.0
    };

    round2(required_score + nice_score)
}

/// Interest alignment boost: +5 when an interest appears in the career name,
/// +3 for every industry tag it appears in. Substring test, case-insensitive,
/// hard ceiling of 10 across all interests.
pub fn interest_boost(interests: &[String], career_name: &str, industries: &[String]) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }

    let career_lower = career_name.to_lowercase();
    let mut boost: f64 = 0.0;

    for interest in interests {
        let interest_lower = interest.to_lowercase();
        if career_lower.contains(&interest_lower) {
            boost += 5.0;
        }
        for industry in industries {
            if industry.to_lowercase().contains(&interest_lower) {
                boost += 3.0;
            }
        }
    }

    boost.min(10.0)
}

/// Coarse experience step boost, identical for every career.
pub fn experience_boost(years: u32) -> f64 {
    match years {
        0 => 0.0,
        1 => 2.0,
        2..=4 => 5.0,
        _ => 8.0,
    }
}

/// Scores every catalog entry against the profile and returns the top `top_n`
/// matches, sorted by score descending. Ties keep catalog order (stable sort).
/// An empty skill list scores 0 everywhere rather than failing.
pub fn recommend(profile: &UserProfile, catalog: &CareerCatalog, top_n: usize) -> Vec<CareerMatch> {
    let user_lower = lower_set(&profile.skills);

    let mut matches: Vec<CareerMatch> = catalog
        .iter()
        .map(|career| {
            let skill_score =
                skill_match_score(&profile.skills, &career.required_skills, &career.nice_to_have);
            let interest = interest_boost(&profile.interests, &career.name, &career.industry);
            let experience = experience_boost(profile.experience_years());

            let score = (skill_score + interest + experience).clamp(0.0, 100.0);

            // Both lists follow catalog declaration order with catalog casing.
            let matching_skills: Vec<String> = career
                .required_skills
                .iter()
                .filter(|s| user_lower.contains(&s.to_lowercase()))
                .cloned()
                .collect();
            let skills_to_learn: Vec<String> = career
                .required_skills
                .iter()
                .filter(|s| !user_lower.contains(&s.to_lowercase()))
                .take(5)
                .cloned()
                .collect();

            CareerMatch {
                career: career.name.clone(),
                match_score: score,
                matching_skills,
                skills_to_learn,
                description: career.description.clone(),
                salary_info: career.avg_salary.clone(),
                growth_outlook: career.growth_outlook.clone(),
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(top_n);
    matches
}
