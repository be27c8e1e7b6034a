use super::OperatorSession;
use edmig_common::SessionError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Interactive session over a line-oriented reader and a writer.
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleSession<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_options(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<(), SessionError> {
        match default.and_then(|d| options.get(d)) {
            Some(label) => writeln!(self.writer, " {} [{}]:", prompt, label)?,
            None => writeln!(self.writer, " {}:", prompt)?,
        }
        for (i, label) in options.iter().enumerate() {
            writeln!(self.writer, "  [{}] {}", i, label)?;
        }
        write!(self.writer, " > ")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Map an answer onto an option position. Labels are only accepted when they
/// are unique, since duplicate labels can only be told apart by position.
fn parse_answer(answer: &str, options: &[String], default: Option<usize>) -> Option<usize> {
    if answer.is_empty() {
        return default.filter(|d| *d < options.len());
    }

    if let Ok(index) = answer.parse::<usize>() {
        return (index < options.len()).then_some(index);
    }

    let mut matches = options
        .iter()
        .enumerate()
        .filter(|(_, label)| label.as_str() == answer);
    match (matches.next(), matches.next()) {
        (Some((index, _)), None) => Some(index),
        _ => None,
    }
}

impl<R: BufRead, W: Write> OperatorSession for ConsoleSession<R, W> {
    fn is_interactive(&self) -> bool {
        true
    }

    fn choice(
        &mut self,
        prompt: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, SessionError> {
        if options.is_empty() {
            return Err(SessionError::NoOptions(prompt.to_string()));
        }

        let mut input = String::new();
        loop {
            self.write_options(prompt, options, default)?;

            input.clear();
            if self.reader.read_line(&mut input)? == 0 {
                return Err(SessionError::InputClosed);
            }

            let answer = input.trim();
            match parse_answer(answer, options, default) {
                Some(index) => return Ok(index),
                None => writeln!(self.writer, " Value \"{}\" is invalid", answer)?,
            }
        }
    }

    fn write_line(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}
