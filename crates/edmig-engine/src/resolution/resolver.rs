//! Conflict Resolution
//!
//! Decision layer for editables the migration could not rebuild on its own.
//! A build failure can be left unresolved or ignored; an ambiguous editable
//! can be mapped onto one of its candidates or left unresolved. Without an
//! operator the conservative choice is always taken.

use super::presenter::ChoicePresenter;
use super::renderer::DiagnosticRenderer;
use crate::session::OperatorSession;
use edmig_common::{
    AmbiguousResolution, BuildFailure, Candidate, ConflictError, Document, NamingStrategy,
    SessionError,
};
use tracing::{debug, info, warn};

pub const LEAVE_UNRESOLVED: &str = "Leave unresolved";
pub const IGNORE_EDITABLE: &str = "Ignore editable (data will be lost)";

pub const BUILD_FAILURE_MESSAGE: &str = "The editable could not be built from the source tree. \
     Leave it unresolved to abort the migration of this document, or ignore it to drop its data.";
pub const CONFLICT_MESSAGE: &str = "The editable can be rebuilt in more than one way. \
     Choose the candidate matching the element in the template.";
pub const WRONG_CHOICE_WARNING: &str = "WARNING: choosing the wrong candidate silently migrates \
     the editable to the wrong name. Inspect the candidates below carefully.";

const BUILD_FAILURE_PROMPT: &str = "How do you want to proceed?";
const CONFLICT_PROMPT: &str = "Which candidate is correct?";
const MIN_CANDIDATES: usize = 2;

pub struct ConflictResolver<'a> {
    strategy: &'a dyn NamingStrategy,
    renderer: DiagnosticRenderer,
}

impl<'a> ConflictResolver<'a> {
    pub fn new(strategy: &'a dyn NamingStrategy) -> Self {
        Self::with_renderer(strategy, DiagnosticRenderer::default())
    }

    pub fn with_renderer(strategy: &'a dyn NamingStrategy, renderer: DiagnosticRenderer) -> Self {
        Self { strategy, renderer }
    }

    fn presenter(&self) -> ChoicePresenter<'_> {
        ChoicePresenter::new(self.strategy, self.renderer.dumper())
    }

    /// Ask the operator whether an editable that failed to build may be
    /// dropped.
    ///
    /// The failure comes back with `ignore_element` set when the operator
    /// chose to ignore it, untouched otherwise. Without an operator nothing
    /// is printed and nothing changes.
    pub fn resolve_build_failure(
        &self,
        session: &mut dyn OperatorSession,
        document: &Document,
        mut failure: BuildFailure,
    ) -> Result<BuildFailure, SessionError> {
        if !session.is_interactive() {
            debug!(
                "Leaving editable '{}' on document {} unresolved (no operator)",
                failure.name, document.id
            );
            return Ok(failure);
        }

        info!(
            "Editable '{}' on document {} could not be built",
            failure.name, document.id
        );
        self.renderer
            .render(session, document, &failure, Some(BUILD_FAILURE_MESSAGE))?;

        let options = vec![LEAVE_UNRESOLVED.to_string(), IGNORE_EDITABLE.to_string()];
        let choice = session.checked_choice(BUILD_FAILURE_PROMPT, &options, Some(0))?;

        if options[choice] == IGNORE_EDITABLE {
            info!("Ignoring editable '{}'", failure.name);
            failure.ignore_element = true;
        } else {
            warn!("Editable '{}' left unresolved", failure.name);
        }

        Ok(failure)
    }

    /// Pick one of several valid reconstructions of an editable.
    ///
    /// Options are listed candidates first and "Leave unresolved" last, so a
    /// selected position maps straight back onto `candidates`. Without an
    /// operator the conflict is left unresolved.
    ///
    /// # Errors
    ///
    /// - [`ConflictError::LogicFault`] for fewer than two candidates, before
    ///   anything is printed.
    /// - [`ConflictError::Ambiguous`] when left unresolved; it carries the
    ///   name each candidate would get and chains `failure`.
    /// - [`ConflictError::Session`] when the session fails or answers with a
    ///   position past "Leave unresolved".
    pub fn resolve_conflict<'c>(
        &self,
        session: &mut dyn OperatorSession,
        document: &Document,
        failure: BuildFailure,
        candidates: &'c [Candidate],
    ) -> Result<&'c Candidate, ConflictError> {
        if candidates.len() < MIN_CANDIDATES {
            return Err(ConflictError::LogicFault {
                expected: MIN_CANDIDATES,
                actual: candidates.len(),
            });
        }

        info!(
            "Editable '{}' on document {} has {} candidates",
            failure.name,
            document.id,
            candidates.len()
        );
        self.renderer
            .render(session, document, &failure, Some(CONFLICT_MESSAGE))?;
        session.write_line(WRONG_CHOICE_WARNING)?;
        session.new_line(1)?;

        let presenter = self.presenter();
        let options = presenter.build_options(candidates);
        presenter.present(session, &options)?;

        let mut labels: Vec<String> = options.into_iter().map(|o| o.label).collect();
        let unresolved = labels.len();
        labels.push(LEAVE_UNRESOLVED.to_string());

        let choice = presenter.choose(session, CONFLICT_PROMPT, &labels, unresolved)?;
        if let Some(candidate) = candidates.get(choice) {
            info!(
                "Resolved editable '{}' to candidate {} ({})",
                failure.name, choice, labels[choice]
            );
            return Ok(candidate);
        }

        labels.truncate(unresolved);
        warn!(
            "Editable '{}' left unresolved, possible names: {}",
            failure.name,
            labels.join(", ")
        );
        Err(AmbiguousResolution {
            failure,
            possible_names: labels,
        }
        .into())
    }
}
