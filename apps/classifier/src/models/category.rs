use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four mutually exclusive labels a posting can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "General IT")]
    GeneralIt,
    #[serde(rename = "Hybrid")]
    Hybrid,
    #[serde(rename = "Non-Tech")]
    NonTech,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::AiMl,
        Category::GeneralIt,
        Category::Hybrid,
        Category::NonTech,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::AiMl => "AI/ML",
            Category::GeneralIt => "General IT",
            Category::Hybrid => "Hybrid",
            Category::NonTech => "Non-Tech",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when an upstream label is not one of the four known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category label '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the canonical labels case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}
