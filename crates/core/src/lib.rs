//! Core types and utilities for fmsh
//!
//! This is the foundation crate that the other fmsh crates depend on.
//! It provides:
//! - Lexical path resolution against a session directory
//! - Base error types
//! - The set of recognized text encodings
//! - Drive enumeration
//! - The `Console` capability trait
//!
//! This crate has no dependencies on other fmsh crates.

pub mod encoding;
pub mod error;
pub mod path;
pub mod platform;
pub mod traits;

pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use traits::Console;
