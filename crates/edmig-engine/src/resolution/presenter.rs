use crate::session::OperatorSession;
use edmig_common::formatter::{ValueDumper, dump_payload};
use edmig_common::{Candidate, NamingStrategy, SessionError};
use tracing::debug;

/// A candidate rendered for the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateOption {
    /// Name the naming strategy assigns; not necessarily unique.
    pub label: String,
    pub details: Vec<Vec<String>>,
}

/// Turns candidates into inspectable options and collects a selection.
pub struct ChoicePresenter<'a> {
    strategy: &'a dyn NamingStrategy,
    dumper: &'a dyn ValueDumper,
}

impl<'a> ChoicePresenter<'a> {
    pub fn new(strategy: &'a dyn NamingStrategy, dumper: &'a dyn ValueDumper) -> Self {
        Self { strategy, dumper }
    }

    /// One option per candidate, in candidate order.
    pub fn build_options(&self, candidates: &[Candidate]) -> Vec<CandidateOption> {
        let options: Vec<CandidateOption> =
            candidates.iter().map(|c| self.build_option(c)).collect();
        debug!("Built {} candidate options", options.len());
        options
    }

    pub fn build_option(&self, candidate: &Candidate) -> CandidateOption {
        let new_name = self.strategy.name_for(candidate);
        let parents = candidate.parent_names();

        let details = vec![
            vec!["Name".to_string(), candidate.name.clone()],
            vec!["Real name".to_string(), candidate.real_name.clone()],
            vec!["New name".to_string(), new_name.clone()],
            vec!["Type".to_string(), candidate.element_type.clone()],
            vec![
                "Parents".to_string(),
                if parents.is_empty() {
                    "-".to_string()
                } else {
                    parents.join(" > ")
                },
            ],
            vec!["Index".to_string(), candidate.index.to_string()],
            vec!["Level".to_string(), candidate.level.to_string()],
            vec!["Data".to_string(), dump_payload(self.dumper, &candidate.data)],
        ];

        CandidateOption {
            label: new_name,
            details,
        }
    }

    /// Print the detail table of every option.
    pub fn present(
        &self,
        session: &mut dyn OperatorSession,
        options: &[CandidateOption],
    ) -> Result<(), SessionError> {
        for (i, option) in options.iter().enumerate() {
            session.title(&format!("[{}] {}", i, option.label))?;
            session.table(&[], &option.details)?;
            session.new_line(1)?;
        }
        Ok(())
    }

    /// Position of the selected label. Without an operator, `default` is
    /// returned without prompting. An answer outside `labels` is a
    /// [`SessionError::InvalidChoice`].
    pub fn choose(
        &self,
        session: &mut dyn OperatorSession,
        prompt: &str,
        labels: &[String],
        default: usize,
    ) -> Result<usize, SessionError> {
        if !session.is_interactive() {
            debug!(
                "No operator attached, defaulting to option {} of {}",
                default,
                labels.len()
            );
            return Ok(default);
        }

        session.checked_choice(prompt, labels, Some(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ConsoleSession, HeadlessSession};
    use edmig_common::formatter::YamlDumper;
    use edmig_common::naming::NestedNamingStrategy;
    use serde_json::json;
    use std::io::Cursor;

    fn nested_candidate() -> Candidate {
        Candidate::new("contentblock1", "content", "wysiwyg")
            .at(0, 1)
            .with_data(json!({"text": "Hello"}))
            .with_parent(Candidate::new("block", "block", "block"))
    }

    #[test]
    fn test_option_details() {
        let presenter = ChoicePresenter::new(&NestedNamingStrategy, &YamlDumper);
        let option = presenter.build_option(&nested_candidate());

        assert_eq!(option.label, "block:1.content");
        let details: Vec<(&str, &str)> = option
            .details
            .iter()
            .map(|row| (row[0].as_str(), row[1].as_str()))
            .collect();
        assert_eq!(
            details,
            vec![
                ("Name", "contentblock1"),
                ("Real name", "content"),
                ("New name", "block:1.content"),
                ("Type", "wysiwyg"),
                ("Parents", "block"),
                ("Index", "0"),
                ("Level", "1"),
                ("Data", "text: Hello"),
            ]
        );
    }

    #[test]
    fn test_duplicate_labels_are_kept() {
        let strategy = |c: &Candidate| c.real_name.clone();
        let presenter = ChoicePresenter::new(&strategy, &YamlDumper);
        let candidates = vec![
            Candidate::new("content", "content", "area").at(0, 1),
            Candidate::new("content", "content", "area").at(0, 2),
        ];

        let options = presenter.build_options(&candidates);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, options[1].label);
        assert_ne!(options[0].details, options[1].details);
    }

    #[test]
    fn test_choose_without_operator_returns_default() {
        let presenter = ChoicePresenter::new(&NestedNamingStrategy, &YamlDumper);
        let mut session = HeadlessSession::new(Vec::new());
        let labels = vec!["a".to_string(), "b".to_string()];

        assert_eq!(presenter.choose(&mut session, "Pick", &labels, 1).unwrap(), 1);
        assert!(session.into_writer().is_empty());
    }

    #[test]
    fn test_choose_prompts_operator() {
        let presenter = ChoicePresenter::new(&NestedNamingStrategy, &YamlDumper);
        let mut session = ConsoleSession::new(Cursor::new(b"0\n".to_vec()), Vec::new());
        let labels = vec!["a".to_string(), "b".to_string()];

        assert_eq!(presenter.choose(&mut session, "Pick", &labels, 1).unwrap(), 0);
    }

    #[test]
    fn test_choose_rejects_out_of_range_answer() {
        struct OffByOne;

        impl OperatorSession for OffByOne {
            fn is_interactive(&self) -> bool {
                true
            }

            fn choice(
                &mut self,
                _prompt: &str,
                options: &[String],
                _default: Option<usize>,
            ) -> Result<usize, SessionError> {
                Ok(options.len())
            }

            fn write_line(&mut self, _text: &str) -> Result<(), SessionError> {
                Ok(())
            }
        }

        let presenter = ChoicePresenter::new(&NestedNamingStrategy, &YamlDumper);
        let labels = vec!["a".to_string(), "b".to_string()];

        assert!(matches!(
            presenter.choose(&mut OffByOne, "Pick", &labels, 1),
            Err(SessionError::InvalidChoice {
                index: 2,
                options: 2
            })
        ));
    }

    #[test]
    fn test_present_lists_every_option() {
        let presenter = ChoicePresenter::new(&NestedNamingStrategy, &YamlDumper);
        let options = presenter.build_options(&[
            Candidate::new("content", "content", "area"),
            nested_candidate(),
        ]);
        let mut session = HeadlessSession::new(Vec::new());
        presenter.present(&mut session, &options).unwrap();

        let output = String::from_utf8(session.into_writer()).unwrap();
        assert!(output.contains("[0] content\n"));
        assert!(output.contains("[1] block:1.content\n"));
        assert!(output.contains("| Parents   | block"));
    }
}
