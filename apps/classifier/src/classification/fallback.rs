//! Fallback Categorizer: coarse, title-only labelling for degraded batches.
//!
//! Checks hybrid keywords before AI keywords and defaults to General IT.
//! It has no Non-Tech outcome: it exists so a batch always shows some
//! category diversity, not to reproduce the primary classifier.

use crate::classification::classifier::Categorizer;
use crate::models::category::Category;
use crate::models::record::JobRecord;

const HYBRID_KEYWORDS: &[&str] = &[
    "mlops",
    "ai engineer",
    "data engineer",
    "analytics engineer",
    "platform engineer",
];

const AI_KEYWORDS: &[&str] = &[
    "ai",
    "machine learning",
    "deep learning",
    "nlp",
    "llm",
    "gpt",
    "computer vision",
    "data scientist",
    "neural",
];

/// Plain lowercase substrings, checked hybrid-first.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackKeywords {
    pub hybrid_keywords: Vec<String>,
    pub ai_keywords: Vec<String>,
}

impl Default for FallbackKeywords {
    fn default() -> Self {
        Self {
            hybrid_keywords: HYBRID_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            ai_keywords: AI_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FallbackCategorizer {
    keywords: FallbackKeywords,
}

impl FallbackCategorizer {
    pub fn new(keywords: FallbackKeywords) -> Self {
        let lower = |ks: Vec<String>| -> Vec<String> {
            ks.into_iter().map(|k| k.to_lowercase()).collect()
        };
        Self {
            keywords: FallbackKeywords {
                hybrid_keywords: lower(keywords.hybrid_keywords),
                ai_keywords: lower(keywords.ai_keywords),
            },
        }
    }

    /// Labels a role title on its own.
    pub fn categorize_title(&self, title: &str) -> Category {
        let title = title.to_lowercase();
        let contains_any = |keywords: &[String]| keywords.iter().any(|k| title.contains(k.as_str()));

        if contains_any(&self.keywords.hybrid_keywords[..]) {
            Category::Hybrid
        } else if contains_any(&self.keywords.ai_keywords[..]) {
            Category::AiMl
        } else {
            Category::GeneralIt
        }
    }
}

impl Categorizer for FallbackCategorizer {
    /// Ignores the description.
    fn categorize(&self, record: &JobRecord) -> Category {
        self.categorize_title(&record.role)
    }

    fn backend(&self) -> &'static str {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> FallbackCategorizer {
        FallbackCategorizer::default()
    }

    #[test]
    fn test_hybrid_checked_before_ai() {
        // "ai engineer" is hybrid even though "ai" alone would be AI/ML
        assert_eq!(fallback().categorize_title("Senior AI Engineer"), Category::Hybrid);
        assert_eq!(fallback().categorize_title("MLOps Lead"), Category::Hybrid);
    }

    #[test]
    fn test_ai_keywords() {
        assert_eq!(fallback().categorize_title("Data Scientist"), Category::AiMl);
        assert_eq!(fallback().categorize_title("NLP Researcher"), Category::AiMl);
    }

    #[test]
    fn test_substring_semantics_are_preserved() {
        // "ai" inside "Maintenance" is still a hit in the coarse matcher
        assert_eq!(fallback().categorize_title("Maintenance Planner"), Category::AiMl);
    }

    #[test]
    fn test_defaults_to_general_it() {
        assert_eq!(fallback().categorize_title("Software Engineer"), Category::GeneralIt);
        assert_eq!(fallback().categorize_title(""), Category::GeneralIt);
    }

    #[test]
    fn test_never_returns_non_tech() {
        let titles = [
            "",
            "Sales Representative",
            "Recruiter",
            "AI Researcher",
            "MLOps Engineer",
            "System Admin",
            "Cashier",
            "   ",
        ];
        for title in titles {
            let category = fallback().categorize_title(title);
            assert_ne!(category, Category::NonTech, "title {title:?}");
            assert!(matches!(
                category,
                Category::Hybrid | Category::AiMl | Category::GeneralIt
            ));
        }
    }

    #[test]
    fn test_description_is_ignored() {
        let record = JobRecord::new("Accountant", "deep learning deep learning");
        assert_eq!(fallback().categorize(&record), Category::GeneralIt);
    }

    #[test]
    fn test_custom_keywords_are_lowercased() {
        let categorizer = FallbackCategorizer::new(FallbackKeywords {
            hybrid_keywords: vec!["Bridge".to_string()],
            ai_keywords: vec![],
        });
        assert_eq!(categorizer.categorize_title("bridge builder"), Category::Hybrid);
        assert_eq!(categorizer.categorize_title("Data Scientist"), Category::GeneralIt);
    }
}
