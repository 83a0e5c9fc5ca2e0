//! Classifier: maps a job record to a single category label.
//!
//! Default: `RuleBasedCategorizer` (weighted lexical scoring + decision table).
//! Degraded mode: `FallbackCategorizer` in `classification::fallback`.
//!
//! Callers hold a `&dyn Categorizer`, so either backend can be swapped in
//! without touching batch or CLI code.

use crate::classification::lexicon::Lexicon;
use crate::classification::scorer::{compute_scores, CategoryScores};
use crate::models::category::Category;
use crate::models::record::JobRecord;

/// AI signals must clear a slightly higher bar than IT signals to count as primary.
pub const AI_THRESHOLD: f64 = 30.0;
pub const IT_THRESHOLD: f64 = 25.0;
/// Secondary-domain score that, with a hybrid indicator, turns a primary match into Hybrid.
pub const HYBRID_MIN_THRESHOLD: f64 = 15.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A total categorizer: every record gets exactly one label, no errors.
pub trait Categorizer: Send + Sync {
    fn categorize(&self, record: &JobRecord) -> Category;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedCategorizer
// ────────────────────────────────────────────────────────────────────────────

/// Primary categorizer over a shared, immutable lexicon.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedCategorizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> RuleBasedCategorizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn scores(&self, record: &JobRecord) -> CategoryScores {
        compute_scores(self.lexicon, record)
    }
}

impl Categorizer for RuleBasedCategorizer<'_> {
    fn categorize(&self, record: &JobRecord) -> Category {
        let scores = self.scores(record);
        let category = decide(&scores);
        tracing::debug!(
            role = %record.role,
            ai = scores.ai,
            it = scores.it,
            hybrid = scores.hybrid,
            non_tech = scores.non_tech,
            %category,
            "categorized posting"
        );
        category
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

/// Convenience wrapper for one-off calls.
pub fn categorize_job_role(lexicon: &Lexicon, role: &str, description: Option<&str>) -> Category {
    let record = JobRecord {
        role: role.to_string(),
        description: description.map(str::to_string),
    };
    RuleBasedCategorizer::new(lexicon).categorize(&record)
}

/// The decision table, first matching rule wins:
/// 1. non-tech signal overrides everything
/// 2. both primaries clear their thresholds → Hybrid
/// 3. AI primary (Hybrid if hybrid indicator and IT ≥ 15)
/// 4. IT primary (Hybrid if hybrid indicator and AI ≥ 15)
/// 5. any signal: strictly greater wins, ties go to General IT
/// 6. nothing → Non-Tech
pub fn decide(scores: &CategoryScores) -> Category {
    let CategoryScores {
        ai,
        it,
        hybrid,
        non_tech,
    } = *scores;

    if non_tech {
        return Category::NonTech;
    }

    if ai >= AI_THRESHOLD && it >= IT_THRESHOLD {
        return Category::Hybrid;
    }

    if ai >= AI_THRESHOLD {
        if hybrid && it >= HYBRID_MIN_THRESHOLD {
            return Category::Hybrid;
        }
        return Category::AiMl;
    }

    if it >= IT_THRESHOLD {
        if hybrid && ai >= HYBRID_MIN_THRESHOLD {
            return Category::Hybrid;
        }
        return Category::GeneralIt;
    }

    if ai > 0.0 || it > 0.0 {
        return if ai > it {
            Category::AiMl
        } else {
            Category::GeneralIt
        };
    }

    Category::NonTech
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(ai: f64, it: f64, hybrid: bool, non_tech: bool) -> CategoryScores {
        CategoryScores {
            ai,
            it,
            hybrid,
            non_tech,
        }
    }

    fn classify(role: &str, description: &str) -> Category {
        let lexicon = Lexicon::builtin().unwrap();
        categorize_job_role(&lexicon, role, Some(description))
    }

    // Decision table

    #[test]
    fn test_non_tech_overrides_max_scores() {
        assert_eq!(decide(&scores(100.0, 100.0, true, true)), Category::NonTech);
    }

    #[test]
    fn test_both_thresholds_met_is_hybrid() {
        assert_eq!(decide(&scores(30.0, 25.0, false, false)), Category::Hybrid);
    }

    #[test]
    fn test_ai_primary_without_hybrid_signal() {
        assert_eq!(decide(&scores(30.0, 20.0, false, false)), Category::AiMl);
    }

    #[test]
    fn test_ai_primary_with_hybrid_signal_and_it_secondary() {
        assert_eq!(decide(&scores(30.0, 15.0, true, false)), Category::Hybrid);
        assert_eq!(decide(&scores(30.0, 14.9, true, false)), Category::AiMl);
    }

    #[test]
    fn test_it_primary_without_hybrid_signal() {
        assert_eq!(decide(&scores(29.9, 25.0, false, false)), Category::GeneralIt);
    }

    #[test]
    fn test_it_primary_with_hybrid_signal_and_ai_secondary() {
        assert_eq!(decide(&scores(15.0, 25.0, true, false)), Category::Hybrid);
        assert_eq!(decide(&scores(14.0, 25.0, true, false)), Category::GeneralIt);
    }

    #[test]
    fn test_weak_signals_larger_score_wins() {
        assert_eq!(decide(&scores(12.0, 8.0, false, false)), Category::AiMl);
        assert_eq!(decide(&scores(3.0, 8.0, false, false)), Category::GeneralIt);
    }

    #[test]
    fn test_weak_signal_tie_goes_to_general_it() {
        assert_eq!(decide(&scores(8.0, 8.0, false, false)), Category::GeneralIt);
    }

    #[test]
    fn test_hybrid_flag_alone_does_not_make_hybrid() {
        assert_eq!(decide(&scores(0.0, 0.0, true, false)), Category::NonTech);
        assert_eq!(decide(&scores(10.0, 5.0, true, false)), Category::AiMl);
    }

    #[test]
    fn test_zero_scores_are_non_tech() {
        assert_eq!(decide(&scores(0.0, 0.0, false, false)), Category::NonTech);
    }

    // End to end with the built-in lexicon

    #[test]
    fn test_ai_researcher_is_ai_ml() {
        assert_eq!(classify("AI Researcher", ""), Category::AiMl);
    }

    #[test]
    fn test_mlops_engineer_is_hybrid() {
        let lexicon = Lexicon::builtin().unwrap();
        let record = JobRecord::new(
            "MLOps Engineer",
            "Run machine learning workloads on kubernetes",
        );
        let s = RuleBasedCategorizer::new(&lexicon).scores(&record);
        assert!(s.ai >= AI_THRESHOLD, "ai was {}", s.ai);
        assert!(s.it >= IT_THRESHOLD, "it was {}", s.it);
        assert_eq!(decide(&s), Category::Hybrid);
    }

    #[test]
    fn test_crafted_tie_resolves_to_general_it() {
        let lexicon = Lexicon::builtin().unwrap();
        let record = JobRecord::title_only("Forecasting with React");
        let s = RuleBasedCategorizer::new(&lexicon).scores(&record);
        assert!(s.ai > 0.0);
        assert_eq!(s.ai, s.it, "scores should tie: {s:?}");
        assert!(!s.hybrid);
        assert_eq!(decide(&s), Category::GeneralIt);
    }

    #[test]
    fn test_empty_input_is_non_tech() {
        assert_eq!(classify("", ""), Category::NonTech);
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(categorize_job_role(&lexicon, "", None), Category::NonTech);
    }

    #[test]
    fn test_whitespace_only_input_is_non_tech() {
        assert_eq!(classify("   ", "\t\n"), Category::NonTech);
    }

    #[test]
    fn test_non_tech_posting_with_tech_mentions_stays_non_tech() {
        assert_eq!(
            classify(
                "Technical Recruiter",
                "Hire machine learning engineers who know pytorch, kubernetes and react"
            ),
            Category::NonTech
        );
    }

    #[test]
    fn test_engineer_mentioning_recruiter_stays_technical() {
        assert_eq!(
            classify(
                "Senior Machine Learning Engineer",
                "Partner with our recruiter and customer service teams"
            ),
            Category::AiMl
        );
    }

    #[test]
    fn test_software_engineer_is_general_it() {
        assert_eq!(
            classify("Software Engineer", "Build REST APIs in Java and Postgres"),
            Category::GeneralIt
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        let lexicon = Lexicon::builtin().unwrap();
        let categorizer = RuleBasedCategorizer::new(&lexicon);
        let record = JobRecord::new("Data Scientist", "forecasting with python and aws");
        let first = categorizer.categorize(&record);
        let second = categorizer.categorize(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn test_backend_label() {
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(RuleBasedCategorizer::new(&lexicon).backend(), "rules");
    }
}
