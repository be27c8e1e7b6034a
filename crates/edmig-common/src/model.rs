//! Migration Data Model
//!
//! Values exchanged between the migration driver and the conflict resolver.
//! Documents and candidates are produced by the tree walker and the build step;
//! the resolver only reads them. A [`BuildFailure`] is the one value the
//! resolver is allowed to touch, and only through its `ignore_element` flag.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The content document an editable belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub path: String,
    #[serde(default)]
    pub template: Option<String>,
}

impl Document {
    pub fn new(id: u64, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            template: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Template name, if one is set and not blank.
    pub fn template(&self) -> Option<&str> {
        self.template
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Failure raised by the build step when an editable cannot be reconstructed
/// unambiguously.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Failed to build editable '{name}' of type '{element_type}'")]
pub struct BuildFailure {
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub element_data: Value,
    /// Messages of the errors collected while building the editable.
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub ignore_element: bool,
}

impl BuildFailure {
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_type: element_type.into(),
            element_data: Value::Null,
            errors: vec![],
            ignore_element: false,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.element_data = data;
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }
}

/// One structurally valid reconstruction of an ambiguous editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub real_name: String,
    #[serde(rename = "type")]
    pub element_type: String,
    /// Zero-based position among siblings.
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub level: usize,
    #[serde(default)]
    pub data: Value,
    /// Ancestors, outermost first.
    #[serde(default)]
    pub parents: Vec<Candidate>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        real_name: impl Into<String>,
        element_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            real_name: real_name.into(),
            element_type: element_type.into(),
            index: 0,
            level: 0,
            data: Value::Null,
            parents: vec![],
        }
    }

    pub fn at(mut self, index: usize, level: usize) -> Self {
        self.index = index;
        self.level = level;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_parent(mut self, parent: Candidate) -> Self {
        self.parents.push(parent);
        self
    }

    pub fn parent_names(&self) -> Vec<&str> {
        self.parents.iter().map(|p| p.real_name.as_str()).collect()
    }
}
