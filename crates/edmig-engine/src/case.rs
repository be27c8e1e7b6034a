//! Conflict case files.
//!
//! A case bundles everything the resolver needs for one editable: the
//! document, the build failure and, for ambiguous editables, the candidates.
//! Cases are read from YAML, or JSON when the file ends in `.json`.

use edmig_common::{BuildFailure, Candidate, Document};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Failed to read case file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML case file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON case file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictCase {
    pub document: Document,
    pub failure: BuildFailure,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl ConflictCase {
    pub async fn load(path: &Path) -> Result<Self, CaseError> {
        let content = tokio::fs::read_to_string(path).await?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, CaseError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, CaseError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Whether the case needs a candidate decision rather than an
    /// ignore/leave decision.
    pub fn is_conflict(&self) -> bool {
        !self.candidates.is_empty()
    }
}
