//! Filesystem actions bound to operations in the registry
//!
//! Every action has the [`Action`](crate::operation::Action) signature and
//! may assume its arguments already passed the operation's checks. Anything
//! that can still go wrong (a file vanishing, permission denied, a full disk)
//! is returned as an [`Error`](crate::error::Error) for the session loop to
//! report.

pub mod files;
pub mod help;
pub mod listing;
pub mod text;

/// Render a file entry the way listings show it
pub(crate) fn file_entry(name: &str, size: u64) -> String {
    format!("{name} ({size} b)")
}

/// Render a directory entry the way listings show it
pub(crate) fn dir_entry(name: &str) -> String {
    format!("{name}/")
}

/// Positional argument, or `""` past the end (the arity rule normally
/// guarantees presence)
pub(crate) fn arg(args: &[String], index: usize) -> &str {
    args.get(index).map_or("", String::as_str)
}
