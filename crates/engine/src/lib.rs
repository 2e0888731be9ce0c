//! # fmsh engine
//!
//! Everything between a typed line and the filesystem:
//!
//! - **Parser**: splits a line into an operation token and arguments
//! - **Registry**: the fixed table of operations with their arity rules,
//!   ordered checks and actions
//! - **Validator**: accepts or rejects a command before anything is touched,
//!   reporting the first failing condition
//! - **Dispatcher**: runs the action bound to an accepted command
//! - **Session**: the working directory, threaded explicitly through the loop

pub mod actions;
pub mod console;
pub mod error;
pub mod operation;
pub mod parser;
pub mod session;
pub mod shell;
pub mod system;
pub mod validator;

// Re-export commonly used types
pub use console::MemoryConsole;
pub use error::{Error, Rejection, Result};
pub use operation::{Arity, Check, Flow, Operation, OperationSpec, REGISTRY};
pub use parser::Command;
pub use session::Session;
pub use shell::{dispatch, execute_line, run_session};
pub use validator::{Validated, check, validate};
