use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One field-match rule: the entry's value at `field_id` is compared
/// against `value`. The literal token `blank` matches empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub field_id: String,
    pub value: String,
}

impl Criterion {
    pub fn new(field_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            value: value.into(),
        }
    }
}

/// How multiple criteria combine into one match decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLogic {
    /// All criteria must match.
    #[default]
    #[serde(rename = "AND")]
    And,
    /// At least one criterion must match.
    #[serde(rename = "OR")]
    Or,
}

impl FromStr for MatchLogic {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(ModelError::UnknownLogic(value.to_string())),
        }
    }
}

impl fmt::Display for MatchLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

/// Saved cleaner settings: which form to scan and which rules flag an entry.
///
/// Read at the start of each run and never mutated mid-run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    pub form_id: String,
    pub criteria: Vec<Criterion>,
    pub logic: MatchLogic,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            form_id: String::new(),
            criteria: Vec::new(),
            logic: MatchLogic::And,
        }
    }
}

impl CleanerConfig {
    /// A config with no criteria or no form id matches nothing; every
    /// scan and deletion run short-circuits on it.
    pub fn is_actionable(&self) -> bool {
        !self.form_id.trim().is_empty() && !self.criteria.is_empty()
    }
}
