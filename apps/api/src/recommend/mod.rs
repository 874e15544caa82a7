// Recommendation engine: weighted skill matching, gap analysis, learning paths.
// Pure functions over the injected catalog — no I/O, no state, no randomness.

pub mod gap;
pub mod handlers;
pub mod learning_path;
pub mod scoring;

use std::collections::HashSet;

/// Case-folded key set for membership tests. Display strings are never
/// normalized; only these keys are.
pub(crate) fn lower_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

/// Rounds to two decimal places, the precision every reported score uses.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(70.0), 70.0);
    }

    #[test]
    fn test_lower_set_folds_case() {
        let set = lower_set(&["Python".to_string(), "SQL".to_string()]);
        assert!(set.contains("python"));
        assert!(set.contains("sql"));
        assert!(!set.contains("Python"));
    }
}
