use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::category::Category;

/// Column names accepted for the role title, in priority order.
pub const ROLE_COLUMNS: &[&str] = &["role", "title"];

/// Column names accepted for the description, in priority order.
pub const DESCRIPTION_COLUMNS: &[&str] = &["description", "job_description", "summary"];

/// Column holding the category label, both upstream and in our output.
pub const CATEGORY_COLUMN: &str = "role_category";

/// The classification unit: a role title and an optional description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub role: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl JobRecord {
    pub fn new(role: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            description: Some(description.into()),
        }
    }

    /// A record with no description at all.
    pub fn title_only(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            description: None,
        }
    }

    /// Description with absent treated as the empty string.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One loosely-typed input row. Every column is kept so rows can be written
/// back unchanged apart from `role_category`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingRow {
    pub fields: Map<String, Value>,
}

impl PostingRow {
    pub fn role(&self) -> &str {
        self.first_text(ROLE_COLUMNS).unwrap_or("")
    }

    pub fn description(&self) -> Option<&str> {
        self.first_text(DESCRIPTION_COLUMNS)
    }

    pub fn has_role_column(&self) -> bool {
        ROLE_COLUMNS.iter().any(|c| self.fields.contains_key(*c))
    }

    /// Upstream label, if present and recognised. Unknown strings count as absent.
    pub fn upstream_category(&self) -> Option<Category> {
        self.fields
            .get(CATEGORY_COLUMN)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }

    pub fn set_category(&mut self, category: Category) {
        self.fields.insert(
            CATEGORY_COLUMN.to_string(),
            Value::String(category.label().to_string()),
        );
    }

    pub fn to_job_record(&self) -> JobRecord {
        JobRecord {
            role: self.role().to_string(),
            description: self.description().map(str::to_string),
        }
    }

    /// First alias present as a string. A present but null/non-string column
    /// stops the search so a higher-priority alias is never shadowed.
    fn first_text(&self, columns: &[&str]) -> Option<&str> {
        columns
            .iter()
            .find_map(|c| self.fields.get(*c))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> PostingRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_role_prefers_role_over_title() {
        let r = row(json!({"role": "Data Engineer", "title": "Ignored"}));
        assert_eq!(r.role(), "Data Engineer");
    }

    #[test]
    fn test_title_alias_used_when_role_missing() {
        let r = row(json!({"title": "AI Researcher"}));
        assert_eq!(r.role(), "AI Researcher");
        assert!(r.has_role_column());
    }

    #[test]
    fn test_missing_role_is_empty() {
        let r = row(json!({"company": "TechCorp"}));
        assert_eq!(r.role(), "");
        assert!(!r.has_role_column());
    }

    #[test]
    fn test_null_and_numeric_description_treated_as_absent() {
        assert_eq!(row(json!({"role": "x", "description": null})).description(), None);
        assert_eq!(row(json!({"role": "x", "description": 42})).description(), None);
        let rec = row(json!({"role": "x", "description": null})).to_job_record();
        assert_eq!(rec.description_text(), "");
    }

    #[test]
    fn test_description_aliases() {
        let r = row(json!({"role": "x", "job_description": "builds APIs"}));
        assert_eq!(r.description(), Some("builds APIs"));
    }

    #[test]
    fn test_upstream_category_ignores_unknown_labels() {
        assert_eq!(
            row(json!({"role_category": "Hybrid"})).upstream_category(),
            Some(Category::Hybrid)
        );
        assert_eq!(row(json!({"role_category": "Unknown"})).upstream_category(), None);
        assert_eq!(row(json!({"role_category": null})).upstream_category(), None);
    }

    #[test]
    fn test_set_category_keeps_passthrough_columns() {
        let mut r = row(json!({"role": "Recruiter", "company": "OldBank", "salary": 90000}));
        r.set_category(Category::NonTech);
        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out["role_category"], "Non-Tech");
        assert_eq!(out["company"], "OldBank");
        assert_eq!(out["salary"], 90000);
    }
}
