use super::OperatorSession;
use edmig_common::SessionError;
use std::io::{self, Stdout, Write};

/// Batch session: output is written, nobody answers.
pub struct HeadlessSession<W> {
    writer: W,
}

impl HeadlessSession<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> HeadlessSession<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> OperatorSession for HeadlessSession<W> {
    fn is_interactive(&self) -> bool {
        false
    }

    /// Answers with `default` without blocking.
    fn choice(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, SessionError> {
        if options.is_empty() {
            return Err(SessionError::NoOptions(prompt.to_string()));
        }
        default
            .filter(|d| *d < options.len())
            .ok_or_else(|| SessionError::NotInteractive(prompt.to_string()))
    }

    fn write_line(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}
