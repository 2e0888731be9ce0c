//! Capability traits for fmsh components
//!
//! The engine never touches stdin/stdout directly. Everything user-facing goes
//! through [`Console`], so a session can be driven by a real terminal or by a
//! scripted buffer in tests.

use crate::Result;

/// Label printed in front of every validation diagnostic
pub const REJECTION_LABEL: &str = "Rejected";

/// Label printed in front of every execution fault
pub const FAULT_LABEL: &str = "ERROR";

/// User-facing input and output channel of a session
///
/// # Examples
///
/// ```ignore
/// fn greet(console: &mut dyn Console) -> Result<()> {
///     console.write_line("Enter your name:")?;
///     if let Some(name) = console.read_line()? {
///         console.write_line(&format!("hello {name}"))?;
///     }
///     Ok(())
/// }
/// ```
pub trait Console {
    /// Write text without a trailing newline
    fn write(&mut self, text: &str) -> Result<()>;

    /// Read one line of input without its line terminator
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Ask a yes/no question, answered with a single keypress
    ///
    /// Anything other than an explicit yes counts as no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Write a full line
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write(line)?;
        self.write("\n")
    }

    /// Report why a command was rejected before dispatch
    fn reject(&mut self, reason: &str) -> Result<()> {
        self.write_line(&format!("{REJECTION_LABEL}: {reason}"))
    }

    /// Report a failure that happened while an action was running
    fn fault(&mut self, message: &str) -> Result<()> {
        self.write_line(&format!("{FAULT_LABEL}: {message}"))
    }
}
