//! Career catalog — the static table every scoring operation runs against.
//!
//! Loaded once at startup via [`CareerCatalog::builtin`] and injected through
//! `AppState`, never accessed as a global. Iteration order is declaration
//! order; every downstream skill list inherits that ordering.

mod data;
pub mod handlers;

use serde::Serialize;

/// One catalog entry. Immutable after load.
#[derive(Debug, Clone, Serialize)]
pub struct CareerProfile {
    pub name: String,
    pub required_skills: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub description: String,
    pub avg_salary: String,
    pub growth_outlook: String,
    pub education_required: String,
    pub industry: Vec<String>,
}

/// Ordered collection of career profiles with name lookup.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<CareerProfile>,
}

impl CareerCatalog {
    /// The built-in production table (12 careers).
    pub fn builtin() -> Self {
        Self {
            careers: data::builtin_careers(),
        }
    }

    /// A catalog from arbitrary entries. Used by tests to substitute fixtures.
    #[allow(dead_code)]
    pub fn from_careers(careers: Vec<CareerProfile>) -> Self {
        Self { careers }
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    /// Career titles in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.careers.iter().map(|c| c.name.clone()).collect()
    }

    /// Exact-name lookup. Career names are keys, matched case-sensitively.
    pub fn get(&self, name: &str) -> Option<&CareerProfile> {
        self.careers.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CareerProfile> {
        self.careers.iter()
    }

    /// Careers whose required or nice-to-have lists mention the skill
    /// (case-insensitive substring, matching the listing filter semantics).
    pub fn search_by_skill(&self, skill: &str) -> Vec<String> {
        let skill_lower = skill.to_lowercase();
        self.careers
            .iter()
            .filter(|c| {
                c.required_skills
                    .iter()
                    .chain(c.nice_to_have.iter())
                    .any(|s| s.to_lowercase().contains(&skill_lower))
            })
            .map(|c| c.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_twelve_careers() {
        let catalog = CareerCatalog::builtin();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_builtin_required_skills_nonempty() {
        for career in CareerCatalog::builtin().iter() {
            assert!(
                !career.required_skills.is_empty(),
                "{} has no required skills",
                career.name
            );
        }
    }

    #[test]
    fn test_get_is_case_sensitive_exact_match() {
        let catalog = CareerCatalog::builtin();
        assert!(catalog.get("Data Scientist").is_some());
        assert!(catalog.get("data scientist").is_none());
        assert!(catalog.get("Astronaut").is_none());
    }

    #[test]
    fn test_names_preserve_declaration_order() {
        let catalog = CareerCatalog::builtin();
        let names = catalog.names();
        assert_eq!(names[0], "Data Scientist");
        assert_eq!(names[1], "Software Engineer");
        assert_eq!(names.last().unwrap(), "Product Manager");
    }

    #[test]
    fn test_data_scientist_required_skill_order() {
        // Downstream gap/path lists depend on this exact declaration order.
        let catalog = CareerCatalog::builtin();
        let ds = catalog.get("Data Scientist").unwrap();
        assert_eq!(
            ds.required_skills,
            vec![
                "Python",
                "Machine Learning",
                "Statistics",
                "SQL",
                "Data Visualization",
                "Pandas",
                "NumPy",
                "Scikit-learn",
                "Deep Learning",
                "Data Analysis"
            ]
        );
    }

    #[test]
    fn test_search_by_skill_matches_required_and_nice() {
        let catalog = CareerCatalog::builtin();
        let with_python = catalog.search_by_skill("python");
        assert!(with_python.contains(&"Data Scientist".to_string()));
        // DevOps Engineer lists Python only under nice-to-have.
        assert!(with_python.contains(&"DevOps Engineer".to_string()));
        assert!(catalog.search_by_skill("underwater basket weaving").is_empty());
    }
}
