//! Keyword lexicons: the nine named pattern groups the scorer reads.
//!
//! Lexicons are configuration data: built once at startup (from the built-in
//! tables below or from a JSON file) and passed by reference into the scorer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classification::matcher::KeywordSet;
use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Built-in keyword data
// ────────────────────────────────────────────────────────────────────────────

const AI_ROLE_TITLES: &[&str] = &[
    r"\bai (researcher|scientist|engineer|specialist|architect|developer)",
    r"(machine learning|\bml) (engineer|scientist|researcher|developer)",
    "data scientist",
    "research scientist",
    "applied scientist",
    "deep learning",
    "computer vision",
    r"\bnlp\b",
    "prompt engineer",
    r"\bllm\b",
    "mlops",
];

const AI_TECHNOLOGIES: &[&str] = &[
    "tensorflow",
    "pytorch",
    r"\bkeras\b",
    "scikit-learn",
    r"\bsklearn\b",
    r"hugging\s?face",
    "transformers",
    r"\bllms?\b",
    r"\bgpt",
    "langchain",
    "openai",
    r"\bbert\b",
    "xgboost",
    "machine learning",
    "neural network",
    "natural language processing",
    "reinforcement learning",
    "generative ai",
    "artificial intelligence",
    r"\bai\b",
    r"\bml\b",
];

const AI_TASKS: &[&str] = &[
    "model training",
    r"train(ing)? models",
    "fine-tun",
    "model evaluation",
    "feature engineering",
    "predictive model",
    "forecasting",
    "recommendation",
    "object detection",
    "image recognition",
    "speech recognition",
    "sentiment analysis",
    "anomaly detection",
    "embeddings",
    r"\binference\b",
];

const IT_ROLE_TITLES: &[&str] = &[
    "software engineer",
    "software developer",
    r"back-?end (engineer|developer)",
    r"front-?end (engineer|developer)",
    r"full[- ]?stack",
    "web developer",
    "mobile developer",
    r"(ios|android) developer",
    "devops",
    "site reliability",
    r"\bsre\b",
    "ops engineer",
    r"system(s)? admin",
    "sysadmin",
    "systems engineer",
    "network engineer",
    "cloud engineer",
    "platform engineer",
    "infrastructure engineer",
    "database administrator",
    r"\bdba\b",
    r"\bqa engineer",
    "test engineer",
    "security engineer",
    "solutions architect",
    "data engineer",
    r"\bit support",
    r"help\s?desk",
];

const IT_WEB_TECH: &[&str] = &[
    "react",
    "angular",
    r"\bvue",
    "javascript",
    "typescript",
    r"\bhtml",
    r"\bcss\b",
    r"node\.?js",
    r"next\.?js",
    "django",
    "flask",
    "rails",
    "graphql",
    r"\brest(ful)? api",
    "jquery",
    r"\bphp\b",
    "wordpress",
    "svelte",
];

const IT_BACKEND_TECH: &[&str] = &[
    r"\bjava\b",
    r"spring boot",
    r"\bc#",
    r"\.net\b",
    "golang",
    r"\brust\b",
    r"\bruby\b",
    "python",
    "postgres",
    "mysql",
    r"\bsql\b",
    "mongodb",
    "redis",
    "kafka",
    "rabbitmq",
    "microservices",
];

const IT_DEVOPS_TECH: &[&str] = &[
    "kubernetes",
    r"\bk8s\b",
    "docker",
    "terraform",
    "ansible",
    r"\baws\b",
    "azure",
    r"\bgcp\b",
    "google cloud",
    "jenkins",
    "ci/cd",
    "github actions",
    r"\bhelm\b",
    "prometheus",
    "grafana",
    "linux",
    "devops",
];

// Bare department nouns ("recruiter", "account manager") only count at the
// start of the title; descriptions mention them in passing.
const NON_TECH_INDICATORS: &[&str] = &[
    r"sales (representative|manager|associate|executive|director)",
    "account executive",
    r"^\s*(\w+\s+){0,2}account manager\b",
    r"^\s*(\w+\s+){0,2}recruiter\b",
    r"talent acquisition (specialist|partner|coordinator|manager|lead)",
    r"human resources (manager|generalist|assistant|specialist|coordinator)",
    r"\bhr (manager|generalist|business partner|coordinator)",
    r"customer service (representative|agent|associate|specialist)",
    "customer support representative",
    "office manager",
    "administrative assistant",
    "executive assistant",
    "receptionist",
    r"\baccountant\b",
    "bookkeeper",
    "paralegal",
    "legal counsel",
    r"\bnurse\b",
    "cashier",
    "warehouse associate",
    "truck driver",
    r"^\s*(\w+\s+){0,2}marketing manager\b",
    "copywriter",
    "social media manager",
];

const HYBRID_INDICATORS: &[&str] = &[
    r"ml\s?ops",
    "ai platform",
    "ml platform",
    r"(ml|ai) infrastructure",
    "model deployment",
    "model serving",
    r"deploy(ing)? (ml|machine learning) models",
    "feature store",
    "data pipeline",
    "data engineer",
    "analytics engineer",
];

// ────────────────────────────────────────────────────────────────────────────
// Serializable lexicon description
// ────────────────────────────────────────────────────────────────────────────

/// Raw pattern lists per group, as read from a lexicon JSON file.
/// Groups missing from the file default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconSpec {
    pub ai_role_titles: Vec<String>,
    pub ai_technologies: Vec<String>,
    pub ai_tasks: Vec<String>,
    pub it_role_titles: Vec<String>,
    pub it_web_tech: Vec<String>,
    pub it_backend_tech: Vec<String>,
    pub it_devops_tech: Vec<String>,
    pub non_tech_indicators: Vec<String>,
    pub hybrid_indicators: Vec<String>,
}

impl LexiconSpec {
    pub fn builtin() -> Self {
        fn owned(patterns: &[&str]) -> Vec<String> {
            patterns.iter().map(|p| p.to_string()).collect()
        }

        Self {
            ai_role_titles: owned(AI_ROLE_TITLES),
            ai_technologies: owned(AI_TECHNOLOGIES),
            ai_tasks: owned(AI_TASKS),
            it_role_titles: owned(IT_ROLE_TITLES),
            it_web_tech: owned(IT_WEB_TECH),
            it_backend_tech: owned(IT_BACKEND_TECH),
            it_devops_tech: owned(IT_DEVOPS_TECH),
            non_tech_indicators: owned(NON_TECH_INDICATORS),
            hybrid_indicators: owned(HYBRID_INDICATORS),
        }
    }

    fn scoring_groups(&self) -> [(&'static str, &[String]); 7] {
        [
            ("ai_role_titles", self.ai_role_titles.as_slice()),
            ("ai_technologies", self.ai_technologies.as_slice()),
            ("ai_tasks", self.ai_tasks.as_slice()),
            ("it_role_titles", self.it_role_titles.as_slice()),
            ("it_web_tech", self.it_web_tech.as_slice()),
            ("it_backend_tech", self.it_backend_tech.as_slice()),
            ("it_devops_tech", self.it_devops_tech.as_slice()),
        ]
    }

    /// Reports every score-feeding group that has no patterns.
    ///
    /// Empty groups are legal (they contribute zero), so callers decide
    /// whether this is fatal.
    pub fn validate(&self) -> Result<(), AppError> {
        let empty: Vec<&str> = self
            .scoring_groups()
            .iter()
            .filter(|(_, patterns)| patterns.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "lexicon groups without patterns: {}",
                empty.join(", ")
            )))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Compiled lexicon
// ────────────────────────────────────────────────────────────────────────────

/// Immutable, compiled keyword sets for every lexicon group.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub ai_role_titles: KeywordSet,
    pub ai_technologies: KeywordSet,
    pub ai_tasks: KeywordSet,
    pub it_role_titles: KeywordSet,
    pub it_web_tech: KeywordSet,
    pub it_backend_tech: KeywordSet,
    pub it_devops_tech: KeywordSet,
    pub non_tech_indicators: KeywordSet,
    pub hybrid_indicators: KeywordSet,
}

impl Lexicon {
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_spec(&LexiconSpec::builtin())
    }

    pub fn from_spec(spec: &LexiconSpec) -> Result<Self, AppError> {
        Ok(Self {
            ai_role_titles: KeywordSet::new("ai_role_titles", &spec.ai_role_titles[..])?,
            ai_technologies: KeywordSet::new("ai_technologies", &spec.ai_technologies[..])?,
            ai_tasks: KeywordSet::new("ai_tasks", &spec.ai_tasks[..])?,
            it_role_titles: KeywordSet::new("it_role_titles", &spec.it_role_titles[..])?,
            it_web_tech: KeywordSet::new("it_web_tech", &spec.it_web_tech[..])?,
            it_backend_tech: KeywordSet::new("it_backend_tech", &spec.it_backend_tech[..])?,
            it_devops_tech: KeywordSet::new("it_devops_tech", &spec.it_devops_tech[..])?,
            non_tech_indicators: KeywordSet::new(
                "non_tech_indicators",
                &spec.non_tech_indicators[..],
            )?,
            hybrid_indicators: KeywordSet::new("hybrid_indicators", &spec.hybrid_indicators[..])?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let spec: LexiconSpec = serde_json::from_str(json)?;
        if let Err(e) = spec.validate() {
            tracing::warn!("{e}; those groups will contribute zero");
        }
        Self::from_spec(&spec)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json(&raw)?;
        tracing::info!("Loaded lexicon from {}", path.display());
        Ok(lexicon)
    }
}
