//! Command validation
//!
//! A parsed [`Command`] is accepted or rejected before anything touches the
//! filesystem. Validation runs three stages, each gating the next:
//!
//! 1. the operation name must be in the registry
//! 2. the argument count must satisfy the operation's arity rule
//! 3. the operation's semantic checks must pass, left to right
//!
//! Evaluation short-circuits: only the first failing condition is reported,
//! and later checks may assume earlier ones held (the distinctness check for
//! `copy` runs only once the source is known to exist). Filesystem probes are
//! queries such as [`Path::is_file`](std::path::Path::is_file) that answer
//! `false` instead of failing, so validation itself never faults.

use crate::actions::arg;
use crate::error::Rejection;
use crate::operation::{Check, Operation, OperationSpec};
use crate::parser::Command;
use crate::session::Session;
use fmsh_core::path::{has_file_name, has_text_extension};
use fmsh_core::{Console, TextEncoding};
use tracing::{debug, warn};

/// A command that passed every check, ready for dispatch
#[derive(Debug, Clone, Copy)]
pub struct Validated<'a> {
    /// Registry row of the accepted operation
    pub spec: &'static OperationSpec,
    /// The command's arguments
    pub args: &'a [String],
}

impl Validated<'_> {
    /// Operation that will run
    #[inline]
    pub fn operation(&self) -> Operation {
        self.spec.operation
    }
}

/// Validate a command and narrate the outcome
///
/// On rejection the diagnostic is written to `console` immediately and the
/// same [`Rejection`] is returned, so callers only need to decide whether to
/// prompt again.
pub fn validate<'a>(
    command: &'a Command,
    session: &Session,
    console: &mut dyn Console,
) -> Result<Validated<'a>, Rejection> {
    match check(command, session) {
        Ok(spec) => Ok(Validated {
            spec,
            args: &command.args,
        }),
        Err(rejection) => {
            debug!(operation = %command.name, reason = %rejection, "Command rejected");
            if let Err(e) = console.reject(&rejection.to_string()) {
                warn!("Failed to report rejection: {}", e);
            }
            Err(rejection)
        }
    }
}

/// Validate a command without reporting anything
pub fn check(command: &Command, session: &Session) -> Result<&'static OperationSpec, Rejection> {
    let spec = Operation::lookup(&command.name)
        .ok_or_else(|| Rejection::UnknownOperation(command.name.clone()))?;

    if !spec.arity.accepts(command.arg_count()) {
        return Err(Rejection::WrongArgumentCount {
            operation: spec.name,
            expected: spec.arity,
            actual: command.arg_count(),
        });
    }

    for check in spec.checks {
        check.evaluate(&command.args, session)?;
    }

    Ok(spec)
}

impl Check {
    /// Evaluate this check against the arguments
    pub fn evaluate(self, args: &[String], session: &Session) -> Result<(), Rejection> {
        match self {
            Self::ExistingDirectory(i) => existing_directory(arg(args, i), session),
            Self::ExistingFile(i) => existing_file(arg(args, i), session),
            Self::DistinctPaths(a, b) => {
                let (first, second) = (arg(args, a), arg(args, b));
                if session.resolve(first) == session.resolve(second) {
                    Err(Rejection::SamePath(second.to_string()))
                } else {
                    Ok(())
                }
            }
            Self::HasFileName(i) => {
                let value = arg(args, i);
                if has_file_name(value) {
                    Ok(())
                } else {
                    Err(Rejection::FileNameMissing(value.to_string()))
                }
            }
            Self::TextExtension(i) => text_extension(arg(args, i)),
            Self::KnownEncoding(i) => match args.get(i) {
                Some(name) if TextEncoding::from_name(name).is_none() => {
                    Err(Rejection::UnsupportedEncoding(name.clone()))
                }
                _ => Ok(()),
            },
            Self::EachTextFile => args.iter().try_for_each(|value| {
                existing_file(value, session)?;
                text_extension(value)
            }),
        }
    }
}

fn existing_directory(value: &str, session: &Session) -> Result<(), Rejection> {
    if session.resolve(value).as_path().is_dir() {
        Ok(())
    } else {
        Err(Rejection::DirectoryNotFound(value.to_string()))
    }
}

fn existing_file(value: &str, session: &Session) -> Result<(), Rejection> {
    if session.resolve(value).as_path().is_file() {
        Ok(())
    } else {
        Err(Rejection::FileNotFound(value.to_string()))
    }
}

fn text_extension(value: &str) -> Result<(), Rejection> {
    if has_text_extension(value) {
        Ok(())
    } else {
        Err(Rejection::NotTextFile(value.to_string()))
    }
}
