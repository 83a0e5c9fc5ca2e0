//! Batch categorization with a diversity guard.
//!
//! A batch whose labels collapse to fewer than `min_distinct` categories is
//! re-labelled with the fallback categorizer. Diverse upstream labels are
//! kept, and only the rows without a usable label are categorized.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classification::classifier::Categorizer;
use crate::models::category::Category;
use crate::models::record::{JobRecord, PostingRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub categories: Vec<Category>,
    pub used_fallback: bool,
}

/// Where the labels written onto a batch of rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    Upstream,
    Primary,
    Fallback,
}

pub fn distinct_count(categories: &[Category]) -> usize {
    categories.iter().collect::<BTreeSet<_>>().len()
}

/// Labels every record with `primary`, switching the whole batch to
/// `fallback` when fewer than `min_distinct` labels appear. Empty batches
/// never switch.
pub fn categorize_batch(
    records: &[JobRecord],
    primary: &dyn Categorizer,
    fallback: &dyn Categorizer,
    min_distinct: usize,
) -> BatchOutcome {
    let categories: Vec<Category> = records.iter().map(|r| primary.categorize(r)).collect();

    if categories.is_empty() {
        return BatchOutcome {
            categories,
            used_fallback: false,
        };
    }

    let distinct = distinct_count(&categories);
    if distinct >= min_distinct {
        info!(
            records = records.len(),
            distinct,
            backend = primary.backend(),
            "batch categorized"
        );
        return BatchOutcome {
            categories,
            used_fallback: false,
        };
    }

    warn!(
        records = records.len(),
        distinct,
        min_distinct,
        "{} output under-diverse, switching to {}",
        primary.backend(),
        fallback.backend()
    );

    BatchOutcome {
        categories: records.iter().map(|r| fallback.categorize(r)).collect(),
        used_fallback: true,
    }
}

/// Writes `role_category` onto every row.
///
/// When the recognised upstream labels already span at least `min_distinct`
/// categories they are kept (rewritten in canonical form), and only rows
/// with a missing or unrecognised label are categorized with `primary`.
/// Otherwise the whole batch goes through [`categorize_batch`].
pub fn resolve_categories(
    rows: &mut [PostingRow],
    primary: &dyn Categorizer,
    fallback: &dyn Categorizer,
    min_distinct: usize,
) -> CategorySource {
    let upstream: Vec<Option<Category>> = rows.iter().map(PostingRow::upstream_category).collect();
    let recognised: Vec<Category> = upstream.iter().flatten().copied().collect();

    if !recognised.is_empty() && distinct_count(&recognised) >= min_distinct {
        let unlabelled = rows.len() - recognised.len();
        info!(rows = rows.len(), unlabelled, "keeping upstream categories");
        for (row, label) in rows.iter_mut().zip(upstream) {
            let category = match label {
                Some(category) => category,
                None => primary.categorize(&row.to_job_record()),
            };
            row.set_category(category);
        }
        return CategorySource::Upstream;
    }

    let records: Vec<JobRecord> = rows.iter().map(PostingRow::to_job_record).collect();
    let outcome = categorize_batch(&records, primary, fallback, min_distinct);

    for (row, category) in rows.iter_mut().zip(outcome.categories) {
        row.set_category(category);
    }

    if outcome.used_fallback {
        CategorySource::Fallback
    } else {
        CategorySource::Primary
    }
}

/// Per-category totals plus the AI/ML share, as shown on the dashboard's metric row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub total: usize,
    pub ai_ml: usize,
    pub general_it: usize,
    pub hybrid: usize,
    pub non_tech: usize,
    /// 0.0 to 100.0; 0 for an empty batch.
    pub ai_share_pct: f64,
}

impl CategoryBreakdown {
    pub fn from_categories<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a Category>,
    {
        let mut breakdown = Self::default();
        for category in categories {
            breakdown.total += 1;
            match category {
                Category::AiMl => breakdown.ai_ml += 1,
                Category::GeneralIt => breakdown.general_it += 1,
                Category::Hybrid => breakdown.hybrid += 1,
                Category::NonTech => breakdown.non_tech += 1,
            }
        }
        breakdown.ai_share_pct = if breakdown.total > 0 {
            breakdown.ai_ml as f64 / breakdown.total as f64 * 100.0
        } else {
            0.0
        };
        breakdown
    }
}
