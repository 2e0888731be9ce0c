//! The session loop and dispatcher
//!
//! Parser → validator → dispatcher, once per input line, until `exit` or the
//! end of input. Rejections are narrated by the validator and the loop simply
//! prompts again; execution faults are reported as `ERROR: <message>` and the
//! loop carries on. Nothing a single command does can end the session.

use crate::error::Result;
use crate::operation::Flow;
use crate::parser::Command;
use crate::session::Session;
use crate::validator::{Validated, validate};
use fmsh_core::Console;
use tracing::debug;

/// Run the action bound to an accepted command
///
/// The action trusts the validator: argument count, existence, extensions and
/// encodings are not re-checked here.
pub fn dispatch(
    validated: Validated<'_>,
    session: &mut Session,
    console: &mut dyn Console,
) -> Result<Flow> {
    debug!(operation = %validated.operation(), args = ?validated.args, "Dispatching");
    (validated.spec.action)(session, validated.args, console)
}

/// Parse, validate and dispatch a single input line
///
/// Empty lines and rejected commands yield `Flow::Continue` without running
/// anything.
pub fn execute_line(line: &str, session: &mut Session, console: &mut dyn Console) -> Result<Flow> {
    let Some(command) = Command::parse(line) else {
        return Ok(Flow::Continue);
    };
    debug!(name = %command.name, args = ?command.args, "Parsed command");

    match validate(&command, session, console) {
        Ok(validated) => dispatch(validated, session, console),
        Err(_) => Ok(Flow::Continue),
    }
}

/// Consecutive failed reads tolerated before the session gives up
const MAX_READ_FAILURES: usize = 3;

/// Drive a session until `exit` or end of input
///
/// # Errors
///
/// Only console failures end the loop with an error: the prompt cannot be
/// written, or input failed to read several times in a row. A single failed
/// read and failures inside actions are reported and the loop continues.
pub fn run_session(session: &mut Session, console: &mut dyn Console) -> Result<()> {
    let mut read_failures = 0;
    loop {
        console.write(&session.prompt())?;
        let line = match console.read_line() {
            Ok(Some(line)) => {
                read_failures = 0;
                line
            }
            Ok(None) => {
                debug!("Input exhausted, ending session");
                return Ok(());
            }
            Err(e) => {
                read_failures += 1;
                if read_failures >= MAX_READ_FAILURES {
                    return Err(e.into());
                }
                debug!(error = %e, read_failures, "Failed to read input");
                console.fault(&e.to_string())?;
                continue;
            }
        };

        match execute_line(&line, session, console) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                debug!("Exit requested");
                return Ok(());
            }
            Err(e) => {
                debug!(error = %e, "Command failed");
                console.fault(&e.to_string())?;
            }
        }
    }
}
