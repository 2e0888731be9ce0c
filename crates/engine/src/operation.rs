//! The operation registry
//!
//! Every operation the shell understands is one row of [`REGISTRY`]: its name,
//! how many arguments it takes, the ordered semantic checks its arguments must
//! pass, and the action that runs once they do. The validator and dispatcher
//! only ever read this table, so adding an operation is a new row rather than
//! a new branch in control flow.

use crate::actions;
use crate::error::Result;
use crate::session::Session;
use fmsh_core::Console;
use std::fmt;

/// What the session loop should do after an action completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Leave the loop
    Exit,
}

/// Signature shared by every action
///
/// Arguments arrive already validated against the operation's checks.
pub type Action = fn(&mut Session, &[String], &mut dyn Console) -> Result<Flow>;

/// Permitted argument counts for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments
    Exactly(usize),
    /// Between `min` and `max` arguments, inclusive
    Between(usize, usize),
    /// `n` or more arguments
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` arguments satisfy this rule
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::Between(min, max) => count >= min && count <= max,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "{n}"),
            Self::Between(min, max) => write!(f, "{min} to {max}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A semantic precondition on the arguments
///
/// Indices refer to argument positions. Checks on an optional position pass
/// when that argument is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Argument resolves to an existing directory
    ExistingDirectory(usize),
    /// Argument resolves to an existing regular file
    ExistingFile(usize),
    /// The two arguments resolve to different absolute paths
    DistinctPaths(usize, usize),
    /// Argument ends in a non-empty file name
    HasFileName(usize),
    /// Argument has the `.txt` extension
    TextExtension(usize),
    /// Argument, if present, names a recognized encoding
    KnownEncoding(usize),
    /// Every argument is an existing file with the `.txt` extension
    EachTextFile,
}

/// Closed set of operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `drives`
    Drives,
    /// `dir [path]`
    Dir,
    /// `dirrec [path]`
    DirRec,
    /// `help`
    Help,
    /// `exit`
    Exit,
    /// `cd <dir>`
    Cd,
    /// `remove <file>`
    Remove,
    /// `copy <file> <destination>`
    Copy,
    /// `move <file> <destination>`
    Move,
    /// `print <file.txt> [encoding]`
    Print,
    /// `create <file.txt> [encoding]`
    Create,
    /// `concat <file.txt> <file.txt> [...]`
    Concat,
}

/// One row of the registry
#[derive(Debug)]
pub struct OperationSpec {
    /// Which operation this row describes
    pub operation: Operation,
    /// Token typed at the prompt
    pub name: &'static str,
    /// Argument grammar shown by `help`
    pub usage: &'static str,
    /// One-line description shown by `help`
    pub summary: &'static str,
    /// Permitted argument counts
    pub arity: Arity,
    /// Semantic checks, evaluated left to right
    pub checks: &'static [Check],
    /// What runs once the command is accepted
    pub action: Action,
}

const COPY_CHECKS: &[Check] = &[
    Check::ExistingFile(0),
    Check::DistinctPaths(0, 1),
    Check::HasFileName(1),
];

/// Process-wide, read-only operation table
pub static REGISTRY: [OperationSpec; 12] = [
    OperationSpec {
        operation: Operation::Drives,
        name: "drives",
        usage: "drives",
        summary: "list mounted drives",
        arity: Arity::Exactly(0),
        checks: &[],
        action: actions::listing::drives,
    },
    OperationSpec {
        operation: Operation::Dir,
        name: "dir",
        usage: "dir [path]",
        summary: "list a directory (default: current)",
        arity: Arity::Between(0, 1),
        checks: &[],
        action: actions::listing::dir,
    },
    OperationSpec {
        operation: Operation::DirRec,
        name: "dirrec",
        usage: "dirrec [path]",
        summary: "list a directory tree recursively",
        arity: Arity::Between(0, 1),
        checks: &[],
        action: actions::listing::dirrec,
    },
    OperationSpec {
        operation: Operation::Help,
        name: "help",
        usage: "help",
        summary: "show this help",
        arity: Arity::Exactly(0),
        checks: &[],
        action: actions::help::help,
    },
    OperationSpec {
        operation: Operation::Exit,
        name: "exit",
        usage: "exit",
        summary: "leave the shell",
        arity: Arity::Exactly(0),
        checks: &[],
        action: actions::help::exit,
    },
    OperationSpec {
        operation: Operation::Cd,
        name: "cd",
        usage: "cd <dir>",
        summary: "change the current directory",
        arity: Arity::Exactly(1),
        checks: &[Check::ExistingDirectory(0)],
        action: actions::listing::cd,
    },
    OperationSpec {
        operation: Operation::Remove,
        name: "remove",
        usage: "remove <file>",
        summary: "delete a file",
        arity: Arity::Exactly(1),
        checks: &[Check::ExistingFile(0)],
        action: actions::files::remove,
    },
    OperationSpec {
        operation: Operation::Copy,
        name: "copy",
        usage: "copy <file> <destination>",
        summary: "copy a file",
        arity: Arity::Exactly(2),
        checks: COPY_CHECKS,
        action: actions::files::copy,
    },
    OperationSpec {
        operation: Operation::Move,
        name: "move",
        usage: "move <file> <destination>",
        summary: "move or rename a file",
        arity: Arity::Exactly(2),
        checks: COPY_CHECKS,
        action: actions::files::move_file,
    },
    OperationSpec {
        operation: Operation::Print,
        name: "print",
        usage: "print <file.txt> [encoding]",
        summary: "print a text file",
        arity: Arity::Between(1, 2),
        checks: &[
            Check::ExistingFile(0),
            Check::TextExtension(0),
            Check::KnownEncoding(1),
        ],
        action: actions::text::print,
    },
    OperationSpec {
        operation: Operation::Create,
        name: "create",
        usage: "create <file.txt> [encoding]",
        summary: "create a text file from one line of input",
        arity: Arity::Between(1, 2),
        checks: &[Check::TextExtension(0), Check::KnownEncoding(1)],
        action: actions::text::create,
    },
    OperationSpec {
        operation: Operation::Concat,
        name: "concat",
        usage: "concat <file.txt> <file.txt> [...]",
        summary: "print several text files one after another",
        arity: Arity::AtLeast(2),
        checks: &[Check::EachTextFile],
        action: actions::text::concat,
    },
];

impl Operation {
    /// Find the registry row for a typed operation name
    ///
    /// Names are case-sensitive.
    pub fn lookup(name: &str) -> Option<&'static OperationSpec> {
        REGISTRY.iter().find(|spec| spec.name == name)
    }

    /// Registry row for this operation
    pub fn spec(self) -> &'static OperationSpec {
        REGISTRY
            .iter()
            .find(|spec| spec.operation == self)
            .unwrap_or_else(|| unreachable!("every operation has a registry row"))
    }

    /// Token typed at the prompt
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
