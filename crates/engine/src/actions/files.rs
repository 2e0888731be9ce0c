//! File operations: `copy`, `move`, `remove`

use super::arg;
use crate::error::Result;
use crate::operation::Flow;
use crate::session::Session;
use crate::system;
use fmsh_core::Console;
use fmsh_core::path::AbsPath;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Copy,
    Move,
}

/// `copy <file> <destination>`
pub fn copy(session: &mut Session, args: &[String], console: &mut dyn Console) -> Result<Flow> {
    transfer(session, args, console, Transfer::Copy)
}

/// `move <file> <destination>`
pub fn move_file(
    session: &mut Session,
    args: &[String],
    console: &mut dyn Console,
) -> Result<Flow> {
    transfer(session, args, console, Transfer::Move)
}

/// `remove <file>`
pub fn remove(session: &mut Session, args: &[String], _console: &mut dyn Console) -> Result<Flow> {
    let path = session.resolve(arg(args, 0));
    system::remove_file(&path)?;
    info!(path = %path, "Removed file");
    Ok(Flow::Continue)
}

fn transfer(
    session: &Session,
    args: &[String],
    console: &mut dyn Console,
    kind: Transfer,
) -> Result<Flow> {
    let from = session.resolve(arg(args, 0));
    let to = session.resolve(arg(args, 1));

    // Validation only looked at the source side; the destination may have
    // appeared since
    if !confirm_overwrite(&to, console)? {
        console.write_line("Cancelled.")?;
        return Ok(Flow::Continue);
    }

    system::create_parent_dirs(&to)?;
    match kind {
        Transfer::Copy => system::copy_file(&from, &to)?,
        Transfer::Move => system::move_file(&from, &to)?,
    }

    info!(from = %from, to = %to, ?kind, "Transferred file");
    Ok(Flow::Continue)
}

/// Ask before replacing an existing path
///
/// Returns `true` when `path` is free or the user agreed to replace it.
pub(crate) fn confirm_overwrite(path: &AbsPath, console: &mut dyn Console) -> Result<bool> {
    if !path.as_path().exists() {
        return Ok(true);
    }
    let confirmed = console.confirm(&format!("{path} already exists. Overwrite?"))?;
    debug!(path = %path, confirmed, "Overwrite prompt answered");
    Ok(confirmed)
}
