//! In-memory console for scripted sessions
//!
//! Input lines, read failures and confirmation answers are queued up front;
//! everything the session writes is captured in a buffer. Used by the test
//! suites and handy for driving a session non-interactively.

use fmsh_core::{Console, Error, Result};
use std::collections::VecDeque;
use std::io;

#[derive(Debug)]
enum Scripted {
    Line(String),
    ReadFailure,
}

/// Scripted [`Console`] implementation
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input: VecDeque<Scripted>,
    answers: VecDeque<bool>,
    output: String,
    prompts: Vec<String>,
}

impl MemoryConsole {
    /// Create a console with no queued input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that will feed these lines in order
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().then_input(lines)
    }

    /// Queue more input lines after whatever is already scripted
    #[must_use]
    pub fn then_input<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.extend(lines.into_iter().map(|line| Scripted::Line(line.into())));
        self
    }

    /// Queue a read that fails the way undecodable terminal input does
    #[must_use]
    pub fn then_read_failure(mut self) -> Self {
        self.input.push_back(Scripted::ReadFailure);
        self
    }

    /// Queue answers for upcoming confirmation prompts
    ///
    /// Once the queue runs dry every further prompt is answered "no".
    #[must_use]
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.answers.extend(answers);
        self
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Confirmation prompts that were shown, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Console for MemoryConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        match self.input.pop_front() {
            Some(Scripted::Line(line)) => Ok(Some(line)),
            Some(Scripted::ReadFailure) => Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ))),
            None => Ok(None),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_fed_in_order() {
        let mut console = MemoryConsole::with_input(["one", "two"]);
        assert_eq!(console.read_line().ok().flatten().as_deref(), Some("one"));
        assert_eq!(console.read_line().ok().flatten().as_deref(), Some("two"));
        assert_eq!(console.read_line().ok().flatten(), None);
    }

    #[test]
    fn test_scripted_read_failure() {
        let mut console = MemoryConsole::new().then_read_failure().then_input(["after"]);
        assert!(console.read_line().is_err());
        assert_eq!(console.read_line().ok().flatten().as_deref(), Some("after"));
    }

    #[test]
    fn test_unscripted_confirm_declines() {
        let mut console = MemoryConsole::new().with_answers([true]);
        assert!(console.confirm("first?").unwrap_or(false));
        assert!(!console.confirm("second?").unwrap_or(true));
        assert_eq!(console.prompts(), ["first?", "second?"]);
    }

    #[test]
    fn test_labels() {
        let mut console = MemoryConsole::new();
        console.reject("bad").ok();
        console.fault("worse").ok();
        assert_eq!(console.output(), "Rejected: bad\nERROR: worse\n");
    }
}
