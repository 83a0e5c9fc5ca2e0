//! Pattern Matcher: counts how many patterns of a keyword set occur in a text field.

use regex::Regex;

use crate::errors::AppError;

/// An immutable, named list of compiled patterns for one semantic facet.
///
/// Patterns are matched against lowercased text, so they are written in lowercase.
/// An empty set is valid and always yields zero matches.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    name: String,
    patterns: Vec<Regex>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(name: &str, patterns: &[S]) -> Result<Self, AppError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| AppError::InvalidPattern {
                    group: name.to_string(),
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            patterns,
        })
    }

    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            patterns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns found at least once in the text. Absent text counts as empty.
    pub fn count_matches(&self, text: Option<&str>) -> usize {
        let text = match text {
            Some(t) if !t.is_empty() && !self.patterns.is_empty() => t.to_lowercase(),
            _ => return 0,
        };
        self.patterns.iter().filter(|p| p.is_match(&text)).count()
    }

    /// True when at least one pattern occurs in the text.
    pub fn any_match(&self, text: Option<&str>) -> bool {
        match text {
            Some(t) if !t.is_empty() => {
                let lower = t.to_lowercase();
                self.patterns.iter().any(|p| p.is_match(&lower))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> KeywordSet {
        KeywordSet::new("test", patterns).unwrap()
    }

    #[test]
    fn test_counts_each_pattern_once() {
        let s = set(&["python", "sql"]);
        assert_eq!(s.count_matches(Some("python python python and SQL")), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let s = set(&["machine learning"]);
        assert_eq!(s.count_matches(Some("MACHINE Learning Engineer")), 1);
    }

    #[test]
    fn test_substring_containment_not_whole_word() {
        let s = set(&["react"]);
        assert_eq!(s.count_matches(Some("reactive systems")), 1);
    }

    #[test]
    fn test_regex_patterns_supported() {
        let s = set(&[r"\bai\b", r"ml\s*ops"]);
        assert_eq!(s.count_matches(Some("AI platform, ML Ops")), 2);
        assert_eq!(s.count_matches(Some("maintain the mailroom")), 0);
    }

    #[test]
    fn test_absent_or_empty_text_yields_zero() {
        let s = set(&["python"]);
        assert_eq!(s.count_matches(None), 0);
        assert_eq!(s.count_matches(Some("")), 0);
        assert!(!s.any_match(None));
    }

    #[test]
    fn test_empty_set_yields_zero() {
        let s = KeywordSet::empty("nothing");
        assert!(s.is_empty());
        assert_eq!(s.count_matches(Some("anything at all")), 0);
        assert!(!s.any_match(Some("anything at all")));
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_group() {
        let err = KeywordSet::new("ai_tasks", &["(broken"]).unwrap_err();
        match err {
            AppError::InvalidPattern { group, pattern, .. } => {
                assert_eq!(group, "ai_tasks");
                assert_eq!(pattern, "(broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
