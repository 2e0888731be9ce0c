//! Terminal user interface for fmsh
//!
//! - The interactive [`TerminalConsole`] used by real sessions
//! - The start-up banner

pub mod console;

pub use console::TerminalConsole;

/// Greeting printed once when a session starts
pub fn banner() -> String {
    format!(
        "fmsh {} - type `help` for commands, `exit` to quit",
        env!("CARGO_PKG_VERSION")
    )
}
