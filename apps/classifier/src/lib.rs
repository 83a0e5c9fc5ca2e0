//! Rule-based job posting classifier.
//!
//! Assigns each posting (role title + optional description) one of four
//! labels (AI/ML, General IT, Hybrid, Non-Tech) using weighted keyword
//! scoring over an immutable lexicon.

pub mod classification;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod models;

pub use classification::classifier::{categorize_job_role, Categorizer, RuleBasedCategorizer};
pub use classification::fallback::FallbackCategorizer;
pub use classification::lexicon::Lexicon;
pub use errors::AppError;
pub use models::{Category, JobRecord, PostingRow};
