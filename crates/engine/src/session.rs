//! Per-session state
//!
//! The working directory lives here rather than in the process, so several
//! sessions (or tests) can run side by side without affecting each other.

use fmsh_core::path::AbsPath;

/// State owned by one interactive session
#[derive(Debug, Clone)]
pub struct Session {
    start_dir: AbsPath,
    cwd: AbsPath,
}

impl Session {
    /// Start a session in `start_dir`
    ///
    /// The start directory doubles as the initial working directory and as
    /// the anchor for `dirrec` output.
    pub fn new(start_dir: AbsPath) -> Self {
        Self {
            cwd: start_dir.clone(),
            start_dir,
        }
    }

    /// Directory the session was started in
    #[inline]
    pub fn start_dir(&self) -> &AbsPath {
        &self.start_dir
    }

    /// Current working directory
    #[inline]
    pub fn cwd(&self) -> &AbsPath {
        &self.cwd
    }

    /// Resolve a typed argument against the working directory
    pub fn resolve(&self, arg: &str) -> AbsPath {
        self.cwd.resolve(arg)
    }

    /// Replace the working directory
    pub fn change_dir(&mut self, dir: AbsPath) {
        tracing::debug!(from = %self.cwd, to = %dir, "Changing directory");
        self.cwd = dir;
    }

    /// Prompt text: the working directory followed by `: `
    pub fn prompt(&self) -> String {
        format!("{}: ", self.cwd)
    }
}
