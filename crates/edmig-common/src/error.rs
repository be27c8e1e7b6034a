use crate::model::BuildFailure;
use thiserror::Error;

/// Errors raised while talking to the operator session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operator input closed while a prompt was pending")]
    InputClosed,

    #[error("Cannot prompt '{0}' without an attached operator")]
    NotInteractive(String),

    #[error("Choice prompt '{0}' has no options")]
    NoOptions(String),

    /// The session answered with a position that names no option.
    #[error("Session answered option {index}, but only {options} options exist")]
    InvalidChoice { index: usize, options: usize },
}

/// The operator (or the non-interactive default) chose to leave a conflict
/// unresolved.
#[derive(Debug, Error)]
#[error(
    "Ambiguous editable '{}' could not be resolved; possible names: {}",
    .failure.name,
    .possible_names.join(", ")
)]
pub struct AmbiguousResolution {
    #[source]
    pub failure: BuildFailure,
    /// Name each candidate would have received, in candidate order.
    pub possible_names: Vec<String>,
}

/// Errors that can occur while resolving a multi-candidate conflict.
#[derive(Debug, Error)]
pub enum ConflictError {
    /// The candidate builder handed over fewer candidates than a conflict
    /// needs. This is a defect upstream, never an operator-facing problem.
    #[error("Conflict resolution needs at least {expected} candidates, got {actual}")]
    LogicFault { expected: usize, actual: usize },

    #[error(transparent)]
    Ambiguous(#[from] AmbiguousResolution),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ConflictError {
    /// Fatal errors must abort the migration run instead of skipping the element.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConflictError::Ambiguous(_))
    }

    pub fn as_ambiguous(&self) -> Option<&AmbiguousResolution> {
        match self {
            ConflictError::Ambiguous(a) => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_ambiguous_chains_failure() {
        let err = ConflictError::from(AmbiguousResolution {
            failure: BuildFailure::new("content", "area"),
            possible_names: vec!["content".into(), "content1".into()],
        });

        assert!(!err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Ambiguous editable 'content' could not be resolved; possible names: content, content1"
        );

        let ambiguous = err.as_ambiguous().unwrap();
        let source = ambiguous.source().unwrap();
        assert_eq!(
            source.to_string(),
            "Failed to build editable 'content' of type 'area'"
        );
    }

    #[test]
    fn test_logic_fault_is_fatal() {
        let err = ConflictError::LogicFault {
            expected: 2,
            actual: 1,
        };
        assert!(err.is_fatal());
        assert!(err.as_ambiguous().is_none());
    }
}
