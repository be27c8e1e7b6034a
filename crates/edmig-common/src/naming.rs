//! Editable Naming Strategies
//!
//! A naming strategy maps a reconstructed editable onto the name it is stored
//! under. The resolver only ever asks a strategy for a name; the two
//! strategies below are the ones the driver ships with.

use crate::model::Candidate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub trait NamingStrategy {
    /// Canonical name the candidate is stored under.
    fn name_for(&self, candidate: &Candidate) -> String;
}

impl<F> NamingStrategy for F
where
    F: Fn(&Candidate) -> String,
{
    fn name_for(&self, candidate: &Candidate) -> String {
        self(candidate)
    }
}

/// Hierarchical names: `outer:1.inner:2.content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedNamingStrategy;

impl NamingStrategy for NestedNamingStrategy {
    fn name_for(&self, candidate: &Candidate) -> String {
        let mut parts: Vec<String> = candidate
            .parents
            .iter()
            .map(|p| format!("{}:{}", p.real_name, p.index + 1))
            .collect();
        parts.push(candidate.real_name.clone());
        parts.join(".")
    }
}

/// Flat names: real name, then parent names, then parent indices
/// (`contentouterinner1_2`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyNamingStrategy;

impl NamingStrategy for LegacyNamingStrategy {
    fn name_for(&self, candidate: &Candidate) -> String {
        if candidate.parents.is_empty() {
            return candidate.real_name.clone();
        }

        let blocks: String = candidate
            .parents
            .iter()
            .map(|p| p.real_name.as_str())
            .collect();
        let indices: Vec<String> = candidate
            .parents
            .iter()
            .map(|p| (p.index + 1).to_string())
            .collect();

        format!("{}{}{}", candidate.real_name, blocks, indices.join("_"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategyKind {
    #[default]
    Nested,
    Legacy,
}

impl NamingStrategyKind {
    pub fn strategy(self) -> Box<dyn NamingStrategy> {
        match self {
            NamingStrategyKind::Nested => Box::new(NestedNamingStrategy),
            NamingStrategyKind::Legacy => Box::new(LegacyNamingStrategy),
        }
    }
}
