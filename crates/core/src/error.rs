//! Base error types for fmsh
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path is not absolute
    #[error("Path must be absolute: {}", .path.display())]
    PathNotAbsolute { path: PathBuf },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
