use crate::session::OperatorSession;
use edmig_common::formatter::{ValueDumper, YamlDumper, dump_payload};
use edmig_common::{BuildFailure, Document, SessionError};

pub const DEFAULT_SEPARATOR_WIDTH: usize = 78;

/// Writes the diagnostic report for a failed or ambiguous editable.
pub struct DiagnosticRenderer {
    dumper: Box<dyn ValueDumper>,
    separator_width: usize,
}

impl Default for DiagnosticRenderer {
    fn default() -> Self {
        Self::new(Box::new(YamlDumper))
    }
}

impl DiagnosticRenderer {
    pub fn new(dumper: Box<dyn ValueDumper>) -> Self {
        Self {
            dumper,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }

    pub fn with_separator_width(mut self, width: usize) -> Self {
        self.separator_width = width.max(1);
        self
    }

    pub fn dumper(&self) -> &dyn ValueDumper {
        self.dumper.as_ref()
    }

    /// Separator, message, sub-errors, then the key/value report.
    pub fn render(
        &self,
        session: &mut dyn OperatorSession,
        document: &Document,
        failure: &BuildFailure,
        message: Option<&str>,
    ) -> Result<(), SessionError> {
        session.new_line(1)?;
        session.write_line(&"-".repeat(self.separator_width))?;
        session.new_line(1)?;

        if let Some(message) = message {
            session.write_line(message)?;
            session.new_line(1)?;
        }

        if !failure.errors.is_empty() {
            session.write_line("Errors:")?;
            for error in &failure.errors {
                session.write_line(&format!(" * {}", error))?;
            }
            session.new_line(1)?;
        }

        session.table(&[], &self.report_rows(document, failure))?;
        session.new_line(1)
    }

    pub fn report_rows(&self, document: &Document, failure: &BuildFailure) -> Vec<Vec<String>> {
        let mut rows = vec![
            vec![
                "Document".to_string(),
                format!("{} (ID {})", document.path, document.id),
            ],
            vec![
                "Element".to_string(),
                format!("{} (type {})", failure.name, failure.element_type),
            ],
        ];

        if let Some(template) = document.template() {
            rows.push(vec!["Template".to_string(), template.to_string()]);
        }

        rows.push(vec![
            "Data".to_string(),
            dump_payload(self.dumper(), &failure.element_data),
        ]);
        rows
    }
}
