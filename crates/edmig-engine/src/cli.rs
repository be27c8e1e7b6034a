use crate::case::ConflictCase;
use crate::resolution::{ConflictResolver, Outcome};
use crate::session::OperatorSession;
use edmig_common::ConflictError;

/// Resolve a single case and turn the decision into an [`Outcome`].
///
/// Only fatal errors are returned; an ambiguous editable left unresolved is a
/// regular outcome.
pub fn run_case(
    resolver: &ConflictResolver<'_>,
    session: &mut dyn OperatorSession,
    case: ConflictCase,
) -> Result<Outcome, ConflictError> {
    let ConflictCase {
        document,
        failure,
        candidates,
    } = case;

    if candidates.is_empty() {
        let failure = resolver.resolve_build_failure(session, &document, failure)?;
        return Ok(if failure.ignore_element {
            Outcome::Ignored(failure)
        } else {
            Outcome::Unresolved {
                failure,
                possible_names: vec![],
            }
        });
    }

    match resolver.resolve_conflict(session, &document, failure, &candidates) {
        Ok(candidate) => Ok(Outcome::Resolved(candidate.clone())),
        Err(ConflictError::Ambiguous(ambiguous)) => Ok(Outcome::Unresolved {
            failure: ambiguous.failure,
            possible_names: ambiguous.possible_names,
        }),
        Err(e) => Err(e),
    }
}

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Resolved(candidate) => {
            let mut output = format!(
                "Resolved '{}' (type {}, level {}, index {})",
                candidate.name, candidate.element_type, candidate.level, candidate.index
            );
            let parents = candidate.parent_names();
            if !parents.is_empty() {
                output.push_str(&format!("\nParents: {}", parents.join(" > ")));
            }
            output
        }
        Outcome::Ignored(failure) => format!(
            "Ignored '{}' (type {}), its data will be lost",
            failure.name, failure.element_type
        ),
        Outcome::Unresolved {
            failure,
            possible_names,
        } => {
            let mut output = format!(
                "Left '{}' (type {}) unresolved",
                failure.name, failure.element_type
            );
            if !possible_names.is_empty() {
                output.push_str("\nPossible names:");
                for name in possible_names {
                    output.push_str(&format!("\n- {}", name));
                }
            }
            output
        }
    }
}
