//! Fixed skill vocabulary and whole-word matcher.
//!
//! One compiled case-insensitive regex per vocabulary entry, built once at
//! startup and shared read-only through `AppState`. Matching is whole-word
//! (`\b`-anchored), so "Java" does not fire on "JavaScript".

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

/// Vocabulary grouped by category. Entry order inside a category is the
/// order extracted skills are reported in.
const SKILL_VOCABULARY: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "Python",
            "Java",
            "JavaScript",
            "C++",
            "C#",
            "C",
            "Ruby",
            "PHP",
            "Swift",
            "Kotlin",
            "Go",
            "Rust",
            "TypeScript",
            "R",
            "MATLAB",
            "Scala",
            "Perl",
            "Shell",
            "Bash",
            "Dart",
            "Objective-C",
        ],
    ),
    (
        "web",
        &[
            "HTML",
            "CSS",
            "React",
            "Angular",
            "Vue.js",
            "Vue",
            "Node.js",
            "Express",
            "Django",
            "Flask",
            "FastAPI",
            "Spring",
            "ASP.NET",
            "jQuery",
            "Bootstrap",
            "Tailwind",
            "Next.js",
            "Nuxt.js",
            "Redux",
            "Webpack",
            "Sass",
            "SCSS",
            "Less",
        ],
    ),
    (
        "databases",
        &[
            "SQL",
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "Cassandra",
            "Oracle",
            "SQLite",
            "MariaDB",
            "DynamoDB",
            "Firebase",
            "Elasticsearch",
            "Neo4j",
            "CouchDB",
        ],
    ),
    (
        "cloud_devops",
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Git",
            "GitHub",
            "GitLab",
            "CI/CD",
            "Terraform",
            "Ansible",
            "Linux",
            "Unix",
            "Nginx",
            "Apache",
            "CloudFormation",
            "Heroku",
        ],
    ),
    (
        "data_ml",
        &[
            "Machine Learning",
            "Deep Learning",
            "Data Analysis",
            "Data Science",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Keras",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Seaborn",
            "Jupyter",
            "NLP",
            "Computer Vision",
            "MLOps",
            "XGBoost",
            "LightGBM",
            "NLTK",
            "SpaCy",
            "OpenCV",
        ],
    ),
    (
        "analytics",
        &[
            "Statistics",
            "Probability",
            "Excel",
            "Power BI",
            "Tableau",
            "Plotly",
            "Data Visualization",
            "Business Intelligence",
            "Analytics",
            "Looker",
            "Google Analytics",
            "Qlik",
        ],
    ),
    (
        "other",
        &[
            "Algorithms",
            "Data Structures",
            "System Design",
            "API",
            "REST",
            "GraphQL",
            "Microservices",
            "Agile",
            "Scrum",
            "Testing",
            "Debugging",
            "OOP",
            "Functional Programming",
            "Design Patterns",
            "Security",
            "Blockchain",
            "IoT",
            "AR/VR",
        ],
    ),
];

struct CompiledSkill {
    category: &'static str,
    name: &'static str,
    pattern: Regex,
}

/// Result of one extraction pass: flat dedup list in vocabulary order plus
/// the per-category grouping.
#[derive(Debug, Clone)]
pub struct SkillExtraction {
    pub skills: Vec<String>,
    pub by_category: BTreeMap<String, Vec<String>>,
}

/// Whole-word, case-insensitive matcher over the fixed vocabulary.
pub struct SkillMatcher {
    compiled: Vec<CompiledSkill>,
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillMatcher {
    pub fn new() -> Self {
        let compiled = SKILL_VOCABULARY
            .iter()
            .flat_map(|(category, skills)| {
                skills.iter().map(|name| CompiledSkill {
                    category,
                    name,
                    pattern: RegexBuilder::new(&format!(r"\b{}\b", regex::escape(name)))
                        .case_insensitive(true)
                        .build()
                        .expect("vocabulary entries compile"),
                })
            })
            .collect();
        Self { compiled }
    }

    /// Number of vocabulary entries.
    pub fn vocabulary_size(&self) -> usize {
        self.compiled.len()
    }

    pub fn extract(&self, text: &str) -> SkillExtraction {
        let mut skills = Vec::new();
        let mut by_category: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut seen = std::collections::HashSet::new();

        for skill in &self.compiled {
            if !skill.pattern.is_match(text) {
                continue;
            }
            // Dedup on the case-folded name ("Vue.js" vs "Vue" stay distinct).
            if !seen.insert(skill.name.to_lowercase()) {
                continue;
            }
            skills.push(skill.name.to_string());
            by_category
                .entry(skill.category.to_string())
                .or_default()
                .push(skill.name.to_string());
        }

        SkillExtraction {
            skills,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_known_skills_case_insensitively() {
        let matcher = SkillMatcher::new();
        let extraction = matcher.extract("Built pipelines in python and PANDAS with sql.");
        assert!(extraction.skills.contains(&"Python".to_string()));
        assert!(extraction.skills.contains(&"Pandas".to_string()));
        assert!(extraction.skills.contains(&"SQL".to_string()));
    }

    #[test]
    fn test_whole_word_matching_rejects_substrings() {
        let matcher = SkillMatcher::new();
        let extraction = matcher.extract("Expert in JavaScript applications.");
        assert!(extraction.skills.contains(&"JavaScript".to_string()));
        // "Java" must not fire inside "JavaScript".
        assert!(!extraction.skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_multi_word_skills_match() {
        let matcher = SkillMatcher::new();
        let extraction = matcher.extract("Focused on machine learning and data analysis.");
        assert!(extraction.skills.contains(&"Machine Learning".to_string()));
        assert!(extraction.skills.contains(&"Data Analysis".to_string()));
    }

    #[test]
    fn test_output_preserves_vocabulary_order_and_dedupes() {
        let matcher = SkillMatcher::new();
        let extraction = matcher.extract("python PYTHON Python and docker");
        let python_count = extraction.skills.iter().filter(|s| *s == "Python").count();
        assert_eq!(python_count, 1);
        // "Python" (programming) is declared before "Docker" (cloud_devops).
        let py = extraction.skills.iter().position(|s| s == "Python").unwrap();
        let docker = extraction.skills.iter().position(|s| s == "Docker").unwrap();
        assert!(py < docker);
    }

    #[test]
    fn test_categories_group_matches() {
        let matcher = SkillMatcher::new();
        let extraction = matcher.extract("React frontends talking to PostgreSQL over REST");
        assert!(extraction.by_category["web"].contains(&"React".to_string()));
        assert!(extraction.by_category["databases"].contains(&"PostgreSQL".to_string()));
        assert!(extraction.by_category["other"].contains(&"REST".to_string()));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let matcher = SkillMatcher::new();
        let extraction = matcher.extract("");
        assert!(extraction.skills.is_empty());
        assert!(extraction.by_category.is_empty());
    }

    #[test]
    fn test_vocabulary_size_counts_all_categories() {
        let matcher = SkillMatcher::new();
        let expected: usize = SKILL_VOCABULARY.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(matcher.vocabulary_size(), expected);
    }
}
