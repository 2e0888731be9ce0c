//! `help` and `exit`

use crate::error::Result;
use crate::operation::{Flow, REGISTRY};
use crate::session::Session;
use fmsh_core::{Console, TextEncoding};

/// `help`
pub fn help(_session: &mut Session, _args: &[String], console: &mut dyn Console) -> Result<Flow> {
    console.write(&help_text())?;
    Ok(Flow::Continue)
}

/// `exit`
pub fn exit(_session: &mut Session, _args: &[String], _console: &mut dyn Console) -> Result<Flow> {
    Ok(Flow::Exit)
}

/// Help text generated from the registry
pub fn help_text() -> String {
    let width = REGISTRY
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Commands:\n");
    for spec in &REGISTRY {
        text.push_str(&format!("  {:<width$}  {}\n", spec.usage, spec.summary));
    }
    text.push_str(&format!(
        "\nPaths are relative to the current directory; `~` is your home.\n\
         Arguments are separated by whitespace and cannot contain spaces.\n\
         Encodings: {} (default utf-8).\n",
        TextEncoding::names()
    ));
    text
}
