//! Skills-gap analysis for one profile against one chosen career.

use serde::{Deserialize, Serialize};

use crate::catalog::CareerCatalog;
use crate::errors::AppError;
use crate::models::UserProfile;
use crate::recommend::{lower_set, round2};

/// Missing/matching breakdown. All skill lists are emitted in catalog
/// declaration order with catalog casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub target_career: String,
    pub current_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_nice: Vec<String>,
    pub matching_required: Vec<String>,
    pub matching_nice: Vec<String>,
    pub completion_percentage: f64,
    pub priority_skills: Vec<String>,
}

/// Partitions the target career's skill lists against the profile.
/// Unknown career names surface as `NotFound` so the request layer can map
/// them to a 404 — this is the one engine operation with an error path.
pub fn analyze_gap(
    profile: &UserProfile,
    target_career: &str,
    catalog: &CareerCatalog,
) -> Result<GapAnalysis, AppError> {
    let career = catalog
        .get(target_career)
        .ok_or_else(|| AppError::NotFound(format!("Career '{target_career}' not found")))?;

    let user_lower = lower_set(&profile.skills);
    let has = |skill: &String| user_lower.contains(&skill.to_lowercase());

    let missing_required: Vec<String> = career
        .required_skills
        .iter()
        .filter(|s| !has(s))
        .cloned()
        .collect();
    let matching_required: Vec<String> = career
        .required_skills
        .iter()
        .filter(|s| has(s))
        .cloned()
        .collect();
    let missing_nice: Vec<String> = career
        .nice_to_have
        .iter()
        .filter(|s| !has(s))
        .cloned()
        .collect();
    let matching_nice: Vec<String> = career
        .nice_to_have
        .iter()
        .filter(|s| has(s))
        .cloned()
        .collect();

    let completion_percentage = if career.required_skills.is_empty() {
        0.0
    } else {
        round2(matching_required.len() as f64 / career.required_skills.len() as f64 * 100.0)
    };

    // Missing required skills first (up to 3), then missing nice-to-have (up to 2).
    let priority_skills: Vec<String> = missing_required
        .iter()
        .take(3)
        .chain(missing_nice.iter().take(2))
        .cloned()
        .collect();

    Ok(GapAnalysis {
        target_career: career.name.clone(),
        current_skills: profile.skills.clone(),
        required_skills: career.required_skills.clone(),
        nice_to_have: career.nice_to_have.clone(),
        missing_required,
        missing_nice,
        matching_required,
        matching_nice,
        completion_percentage,
        priority_skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CareerProfile;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            skills: strings(skills),
            interests: vec![],
            education_level: "Bachelor's".to_string(),
            gpa: None,
            experience_years: None,
        }
    }

    #[test]
    fn test_unknown_career_is_not_found() {
        let catalog = CareerCatalog::builtin();
        let result = analyze_gap(&profile(&["Python"]), "Astronaut", &catalog);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_required_partition_is_exact() {
        let catalog = CareerCatalog::builtin();
        for career in catalog.iter() {
            let gap = analyze_gap(
                &profile(&["Python", "SQL", "Git", "Docker"]),
                &career.name,
                &catalog,
            )
            .unwrap();

            // matching ∪ missing = required, no overlap, order preserved.
            let mut recombined = Vec::new();
            let mut matching = gap.matching_required.iter().peekable();
            let mut missing = gap.missing_required.iter().peekable();
            for skill in &career.required_skills {
                if matching.peek() == Some(&skill) {
                    recombined.push(matching.next().unwrap().clone());
                } else {
                    assert_eq!(missing.peek(), Some(&skill));
                    recombined.push(missing.next().unwrap().clone());
                }
            }
            assert_eq!(recombined, career.required_skills, "career {}", career.name);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive_but_output_uses_catalog_casing() {
        let catalog = CareerCatalog::builtin();
        let gap = analyze_gap(&profile(&["python", "sql"]), "Data Scientist", &catalog).unwrap();
        assert!(gap.matching_required.contains(&"Python".to_string()));
        assert!(gap.matching_required.contains(&"SQL".to_string()));
        assert!(!gap.matching_required.contains(&"python".to_string()));
    }

    #[test]
    fn test_completion_percentage_rounded() {
        let catalog = CareerCatalog::builtin();
        // Frontend Developer has 9 required skills; 1 match → 11.11%.
        let gap = analyze_gap(&profile(&["JavaScript"]), "Frontend Developer", &catalog).unwrap();
        assert_eq!(gap.completion_percentage, 11.11);
    }

    #[test]
    fn test_completion_zero_when_required_empty() {
        let catalog = CareerCatalog::from_careers(vec![CareerProfile {
            name: "Empty Role".to_string(),
            required_skills: vec![],
            nice_to_have: strings(&["Python"]),
            description: String::new(),
            avg_salary: String::new(),
            growth_outlook: String::new(),
            education_required: String::new(),
            industry: vec![],
        }]);
        let gap = analyze_gap(&profile(&["Python"]), "Empty Role", &catalog).unwrap();
        assert_eq!(gap.completion_percentage, 0.0);
    }

    #[test]
    fn test_priority_skills_three_required_then_two_nice() {
        let catalog = CareerCatalog::builtin();
        let gap = analyze_gap(&profile(&["Nothing Relevant"]), "Data Scientist", &catalog).unwrap();
        assert_eq!(
            gap.priority_skills,
            vec![
                "Python",
                "Machine Learning",
                "Statistics",
                "TensorFlow",
                "PyTorch"
            ]
        );
    }

    #[test]
    fn test_priority_skills_shorter_when_lists_nearly_complete() {
        let catalog = CareerCatalog::builtin();
        let ds = catalog.get("Data Scientist").unwrap();
        let mut skills = ds.required_skills.clone();
        skills.extend(ds.nice_to_have.clone());
        // Leave exactly one required and one nice-to-have skill missing.
        skills.retain(|s| s != "Statistics" && s != "Spark");

        let owned: Vec<&str> = skills.iter().map(|s| s.as_str()).collect();
        let gap = analyze_gap(&profile(&owned), "Data Scientist", &catalog).unwrap();
        assert_eq!(gap.priority_skills, vec!["Statistics", "Spark"]);
        assert_eq!(gap.completion_percentage, 90.0);
    }
}
