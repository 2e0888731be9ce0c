//! Interactive console on stdin/stdout

use dialoguer::{Confirm, theme::ColorfulTheme};
use fmsh_core::traits::{FAULT_LABEL, REJECTION_LABEL};
use fmsh_core::{Console, Result};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, IsTerminal, Write};

/// [`Console`] backed by the process's standard streams
///
/// Confirmation is a single keypress when stdin is a terminal. With piped
/// input it falls back to reading a line and accepting `y`/`yes`, so scripts
/// can drive the shell.
pub struct TerminalConsole {
    color: bool,
    interactive: bool,
}

impl TerminalConsole {
    /// Create a console, detecting whether the streams are terminals
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
            interactive: io::stdin().is_terminal(),
        }
    }

    fn confirm_from_line(&mut self, prompt: &str) -> Result<bool> {
        self.write(&format!("{prompt} [y/N] "))?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(is_yes(&answer))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(decode_line(&buf)))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if !self.interactive {
            return self.confirm_from_line(prompt);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .wait_for_newline(false)
            .interact()
            .map_err(|e| fmsh_core::Error::Message(format!("Failed to read user input: {e}")))
    }

    fn reject(&mut self, reason: &str) -> Result<()> {
        if self.color {
            self.write_line(&format!("{}: {}", REJECTION_LABEL.yellow().bold(), reason.yellow()))
        } else {
            self.write_line(&format!("{REJECTION_LABEL}: {reason}"))
        }
    }

    fn fault(&mut self, message: &str) -> Result<()> {
        if self.color {
            self.write_line(&format!("{}: {}", FAULT_LABEL.red().bold(), message.red()))
        } else {
            self.write_line(&format!("{FAULT_LABEL}: {message}"))
        }
    }
}

/// Decode raw terminal input, replacing invalid UTF-8 and dropping the line
/// terminator
fn decode_line(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_strips_terminator() {
        assert_eq!(decode_line(b"dir sub\r\n"), "dir sub");
        assert_eq!(decode_line(b"last"), "last");
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        assert_eq!(decode_line(b"dir \xff\xfe\n"), "dir \u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
