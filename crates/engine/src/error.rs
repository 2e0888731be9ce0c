//! Error types for fmsh-engine
//!
//! Two tiers, kept deliberately separate:
//!
//! - [`Rejection`]: a command failed validation. Expected, reported to the user
//!   as a diagnostic, and never propagated past the session loop.
//! - [`Error`]: an action failed while running. Caught at the top of the
//!   session loop, printed as `ERROR: <message>`, and the loop continues.

use crate::operation::Arity;
use fmsh_core::TextEncoding;
use fmsh_core::path::AbsPath;
use thiserror::Error;

/// Result type alias for fmsh-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a command was refused before dispatch
///
/// Path-carrying variants hold the argument exactly as the user typed it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Operation name is not in the registry
    #[error("operation does not exist: {0}")]
    UnknownOperation(String),

    /// Argument count outside the operation's arity rule
    #[error("wrong argument count for operation {operation}: expected {expected}, got {actual}")]
    WrongArgumentCount {
        operation: &'static str,
        expected: Arity,
        actual: usize,
    },

    /// Argument should name an existing directory
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// Argument should name an existing file
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Source and destination resolve to the same absolute path
    #[error("paths lead to the same file: {0}")]
    SamePath(String),

    /// Destination has no final file name segment
    #[error("file name is missing in destination: {0}")]
    FileNameMissing(String),

    /// Argument does not have the `.txt` extension
    #[error("extension is not .txt: {0}")]
    NotTextFile(String),

    /// Encoding name outside the encoding set
    #[error("unsupported encoding: {0} (expected one of {expected})", expected = TextEncoding::names())]
    UnsupportedEncoding(String),
}

/// Failure while executing a validated command
#[derive(Error, Debug)]
pub enum Error {
    /// Error reading a file
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a file
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error removing a file
    #[error("Failed to remove file {path}: {source}")]
    FileRemove {
        path: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error copying a file
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: AbsPath,
        to: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error moving a file
    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        from: AbsPath,
        to: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error creating a directory
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error reading a directory
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error with file metadata
    #[error("Failed to read metadata for {path}: {source}")]
    Metadata {
        path: AbsPath,
        #[source]
        source: std::io::Error,
    },

    /// Error during a recursive walk
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: AbsPath,
        #[source]
        source: walkdir::Error,
    },

    /// Console or path error from the core crate
    #[error(transparent)]
    Core(#[from] fmsh_core::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn abs(path: &str) -> AbsPath {
        AbsPath::new(PathBuf::from(path)).expect("absolute test path")
    }

    #[test]
    fn test_unknown_operation_message() {
        let msg = Rejection::UnknownOperation("fly".to_string()).to_string();
        assert_eq!(msg, "operation does not exist: fly");
    }

    #[test]
    fn test_wrong_argument_count_message() {
        let msg = Rejection::WrongArgumentCount {
            operation: "copy",
            expected: Arity::Exactly(2),
            actual: 1,
        }
        .to_string();
        assert!(msg.contains("wrong argument count for operation copy"));
        assert!(msg.contains("expected 2"));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn test_unsupported_encoding_lists_choices() {
        let msg = Rejection::UnsupportedEncoding("koi8-r".to_string()).to_string();
        assert!(msg.contains("koi8-r"));
        assert!(msg.contains("utf-8, utf-16, ascii, utf-32"));
    }

    #[test]
    fn test_same_path_message() {
        let msg = Rejection::SamePath("a.txt".to_string()).to_string();
        assert!(msg.starts_with("paths lead to the same file"));
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = Error::FileRead {
            path: abs("/data/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/missing.txt"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_copy_error_names_both_paths() {
        let err = Error::Copy {
            from: abs("/a.txt"),
            to: abs("/b/c.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/a.txt"));
        assert!(msg.contains("/b/c.txt"));
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: Error = fmsh_core::Error::Message("console closed".to_string()).into();
        assert_eq!(err.to_string(), "console closed");
    }
}
