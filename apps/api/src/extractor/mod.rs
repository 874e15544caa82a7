//! Resume extraction — PDF text recovery plus keyword/pattern scanning.
//!
//! Output feeds the recommendation engine as a pre-filled profile; every
//! failure here is recoverable (the dashboard falls back to manual entry),
//! so extraction errors never become transport-level failures.

pub mod handlers;
mod matcher;

pub use matcher::{SkillExtraction, SkillMatcher};

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum recovered characters for a parse to count as successful.
const MIN_TEXT_CHARS: usize = 50;
/// Preview length returned to the caller.
const TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not extract sufficient text from PDF")]
    InsufficientText,
}

/// Everything recovered from one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub text_length: usize,
    pub skills: Vec<String>,
    pub skills_by_category: std::collections::BTreeMap<String, Vec<String>>,
    pub education: Vec<String>,
    pub experience_years: u32,
    pub contact: ContactInfo,
    pub text_preview: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Recovers plain text from PDF bytes.
pub fn extract_text(file_bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(file_bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(text.trim().to_string())
}

/// Degree-level labels, one per regex family. Hits are deduplicated and
/// returned sorted.
static EDUCATION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\bphd\b", "PhD"),
        (r"\bdoctorate\b", "PhD"),
        (r"\bmaster['s]*\b", "Master's"),
        (r"\bm\.?s\.?\b", "Master's"),
        (r"\bmsc\b", "Master's"),
        (r"\bm\.?tech\b", "Master's"),
        (r"\bmba\b", "MBA"),
        (r"\bbachelor['s]*\b", "Bachelor's"),
        (r"\bb\.?s\.?\b", "Bachelor's"),
        (r"\bbsc\b", "Bachelor's"),
        (r"\bb\.?tech\b", "Bachelor's"),
        (r"\bb\.?e\.?\b", "Bachelor's"),
    ]
    .iter()
    .map(|(pat, label)| (Regex::new(pat).expect("valid education pattern"), *label))
    .collect()
});

pub fn extract_education(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let found: BTreeSet<&str> = EDUCATION_PATTERNS
        .iter()
        .filter(|(re, _)| re.is_match(&text_lower))
        .map(|(_, label)| *label)
        .collect();
    found.into_iter().map(|s| s.to_string()).collect()
}

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
        r"experience[:\s]+(\d+)\+?\s*years?",
        r"(\d+)\+?\s*years?\s+(?:in|as)",
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("valid experience pattern"))
    .collect()
});

/// Best-guess years of experience: the maximum over all numeric-pattern hits,
/// 0 when nothing matches.
pub fn extract_experience_years(text: &str) -> u32 {
    let text_lower = text.to_lowercase();
    EXPERIENCE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(&text_lower))
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
        .max()
        .unwrap_or(0)
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}").unwrap());
static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").unwrap());
static GITHUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"github\.com/[\w-]+").unwrap());

pub fn extract_contact(text: &str) -> ContactInfo {
    let text_lower = text.to_lowercase();
    ContactInfo {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        linkedin: LINKEDIN_RE
            .find(&text_lower)
            .map(|m| m.as_str().to_string()),
        github: GITHUB_RE.find(&text_lower).map(|m| m.as_str().to_string()),
    }
}

/// Full resume parse: text recovery plus all extraction passes.
pub fn parse_resume(file_bytes: &[u8], matcher: &SkillMatcher) -> Result<ParsedResume, ExtractError> {
    let text = extract_text(file_bytes)?;
    if text.len() < MIN_TEXT_CHARS {
        return Err(ExtractError::InsufficientText);
    }

    let SkillExtraction {
        skills,
        by_category,
    } = matcher.extract(&text);

    Ok(ParsedResume {
        text_length: text.len(),
        skills,
        skills_by_category: by_category,
        education: extract_education(&text),
        experience_years: extract_experience_years(&text),
        contact: extract_contact(&text),
        text_preview: text.chars().take(TEXT_PREVIEW_CHARS).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_education_finds_degrees() {
        let text = "BSc in Computer Science, currently pursuing a Master's degree";
        let education = extract_education(text);
        assert!(education.contains(&"Bachelor's".to_string()));
        assert!(education.contains(&"Master's".to_string()));
    }

    #[test]
    fn test_extract_education_dedupes_and_sorts() {
        let text = "PhD candidate. Doctorate expected 2027. Holds an MBA.";
        assert_eq!(extract_education(text), vec!["MBA", "PhD"]);
    }

    #[test]
    fn test_extract_education_empty_for_plain_text() {
        assert!(extract_education("worked at a startup for a while").is_empty());
    }

    #[test]
    fn test_extract_experience_years_picks_maximum() {
        let text = "2 years of experience in Python. 5+ years experience with SQL.";
        assert_eq!(extract_experience_years(text), 5);
    }

    #[test]
    fn test_extract_experience_years_alternate_phrasings() {
        assert_eq!(extract_experience_years("Experience: 4 years"), 4);
        assert_eq!(extract_experience_years("3 years as a data analyst"), 3);
        assert_eq!(extract_experience_years("7 years in backend development"), 7);
    }

    #[test]
    fn test_extract_experience_years_defaults_to_zero() {
        assert_eq!(extract_experience_years("recent graduate, no history"), 0);
    }

    #[test]
    fn test_extract_contact_info() {
        let text = "Jane Doe, jane.doe@example.com, (555) 123-4567, \
                    linkedin.com/in/janedoe and github.com/janedoe";
        let contact = extract_contact(text);
        assert_eq!(contact.email.as_deref(), Some("jane.doe@example.com"));
        assert!(contact.phone.is_some());
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(contact.github.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn test_extract_contact_all_absent() {
        let contact = extract_contact("no contact details here");
        assert!(contact.email.is_none());
        assert!(contact.phone.is_none());
        assert!(contact.linkedin.is_none());
        assert!(contact.github.is_none());
    }

    #[test]
    fn test_parse_resume_rejects_unreadable_bytes() {
        let matcher = SkillMatcher::new();
        let result = parse_resume(b"not a pdf at all", &matcher);
        assert!(result.is_err());
    }
}
