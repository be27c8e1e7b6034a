use edmig_common::{BuildFailure, Candidate};
use serde::Serialize;

/// What the driver does with an editable after resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Migrate the editable as this candidate.
    Resolved(Candidate),

    /// Skip the editable; its data is dropped.
    Ignored(BuildFailure),

    /// Leave the editable (and its document) unmigrated.
    Unresolved {
        failure: BuildFailure,
        possible_names: Vec<String>,
    },
}

impl Outcome {
    /// Whether the migration of the document can go on. An ignored editable
    /// is not resolved, but its document no longer waits on a decision.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Outcome::Unresolved { .. })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved(_))
    }
}
