//! Operator Sessions
//!
//! The resolver never talks to a terminal directly. Everything it prints and
//! every question it asks goes through an [`OperatorSession`], which is either
//! a [`ConsoleSession`] with a human attached or a [`HeadlessSession`] for
//! batch runs.

pub mod console;
pub mod headless;

pub use console::ConsoleSession;
pub use headless::HeadlessSession;

use edmig_common::SessionError;
use edmig_common::formatter::format_table;

pub trait OperatorSession {
    /// Whether a human can answer prompts right now.
    fn is_interactive(&self) -> bool;

    /// Ask the operator to pick one of `options` and return its position.
    ///
    /// Blocks until answered. `default` is used when the operator submits an
    /// empty answer.
    fn choice(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, SessionError>;

    /// [`choice`](Self::choice), rejecting a position outside `options`.
    fn checked_choice(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, SessionError> {
        let index = self.choice(prompt, options, default)?;
        if index >= options.len() {
            return Err(SessionError::InvalidChoice {
                index,
                options: options.len(),
            });
        }
        Ok(index)
    }

    fn write_line(&mut self, text: &str) -> Result<(), SessionError>;

    fn new_line(&mut self, count: usize) -> Result<(), SessionError> {
        for _ in 0..count {
            self.write_line("")?;
        }
        Ok(())
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), SessionError> {
        let table = format_table(headers, rows);
        for line in table.lines() {
            self.write_line(line)?;
        }
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<(), SessionError> {
        self.write_line(text)?;
        self.write_line(&"=".repeat(text.chars().count()))?;
        self.new_line(1)
    }
}
