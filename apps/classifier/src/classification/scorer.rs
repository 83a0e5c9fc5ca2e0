//! Category Scorer: per-category relevance scores and the two boolean detectors.
//!
//! Role-title hits carry full weight; description hits are fractional
//! corroboration. Every technology sub-component is capped on its own before
//! summation, and each total is clamped to 100.

use serde::Serialize;

use crate::classification::lexicon::Lexicon;
use crate::classification::matcher::KeywordSet;
use crate::models::record::JobRecord;

pub const MAX_SCORE: f64 = 100.0;

const AI_ROLE_POINTS: f64 = 30.0;
const AI_TECH_POINTS: f64 = 10.0;
const AI_TECH_CAP: f64 = 20.0;
const AI_TECH_DESC_WEIGHT: f64 = 0.3;
const AI_TASK_POINTS: f64 = 8.0;
const AI_TASK_CAP: f64 = 20.0;
const AI_TASK_DESC_WEIGHT: f64 = 0.2;

const IT_ROLE_POINTS: f64 = 25.0;
const IT_TECH_POINTS: f64 = 8.0;
const IT_TECH_CAP: f64 = 15.0;
const IT_TECH_DESC_WEIGHT: f64 = 0.3;

/// Transient per-record scores. Recomputed on every call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScores {
    pub ai: f64,
    pub it: f64,
    pub hybrid: bool,
    pub non_tech: bool,
}

pub fn compute_scores(lexicon: &Lexicon, record: &JobRecord) -> CategoryScores {
    CategoryScores {
        ai: compute_ai_score(lexicon, record),
        it: compute_it_score(lexicon, record),
        hybrid: is_hybrid_role(lexicon, record),
        non_tech: is_non_tech_role(lexicon, record),
    }
}

/// AI/ML relevance in [0, 100].
pub fn compute_ai_score(lexicon: &Lexicon, record: &JobRecord) -> f64 {
    let role = Some(record.role.as_str());

    let title_points = lexicon.ai_role_titles.count_matches(role) as f64 * AI_ROLE_POINTS;
    let tech = capped_component(
        &lexicon.ai_technologies,
        record,
        AI_TECH_DESC_WEIGHT,
        AI_TECH_POINTS,
        AI_TECH_CAP,
    );
    let tasks = capped_component(
        &lexicon.ai_tasks,
        record,
        AI_TASK_DESC_WEIGHT,
        AI_TASK_POINTS,
        AI_TASK_CAP,
    );

    (title_points + tech + tasks).min(MAX_SCORE)
}

/// General IT relevance in [0, 100].
pub fn compute_it_score(lexicon: &Lexicon, record: &JobRecord) -> f64 {
    let role = Some(record.role.as_str());

    let title_points = lexicon.it_role_titles.count_matches(role) as f64 * IT_ROLE_POINTS;
    let tech: f64 = [
        &lexicon.it_web_tech,
        &lexicon.it_backend_tech,
        &lexicon.it_devops_tech,
    ]
    .into_iter()
    .map(|set| {
        capped_component(
            set,
            record,
            IT_TECH_DESC_WEIGHT,
            IT_TECH_POINTS,
            IT_TECH_CAP,
        )
    })
    .sum();

    (title_points + tech).min(MAX_SCORE)
}

/// Any non-tech indicator in title or description.
pub fn is_non_tech_role(lexicon: &Lexicon, record: &JobRecord) -> bool {
    lexicon
        .non_tech_indicators
        .any_match(Some(combined_text(record).as_str()))
}

/// Any hybrid indicator in title or description.
pub fn is_hybrid_role(lexicon: &Lexicon, record: &JobRecord) -> bool {
    lexicon
        .hybrid_indicators
        .any_match(Some(combined_text(record).as_str()))
}

/// points × (role hits + weight × description hits), capped.
fn capped_component(
    set: &KeywordSet,
    record: &JobRecord,
    description_weight: f64,
    points_per_hit: f64,
    cap: f64,
) -> f64 {
    let role_hits = set.count_matches(Some(record.role.as_str())) as f64;
    let description_hits = set.count_matches(record.description.as_deref()) as f64;
    (points_per_hit * (role_hits + description_weight * description_hits)).min(cap)
}

fn combined_text(record: &JobRecord) -> String {
    format!("{} {}", record.role, record.description_text())
}
