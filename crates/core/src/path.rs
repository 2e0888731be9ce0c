//! Lexical path resolution for session arguments
//!
//! Arguments typed at the prompt are always interpreted relative to the
//! session's working directory, never the process working directory. This
//! module turns such an argument into an [`AbsPath`]: the absolute, lexically
//! normalised form that the validator compares and the actions operate on.
//!
//! Normalisation is purely textual. `.` segments are dropped and `..` removes
//! the preceding segment; symbolic links and filesystem case-folding are not
//! considered, so two spellings are "the same path" exactly when their
//! normalised strings are equal.
//!
//! # Examples
//!
//! ```
//! use fmsh_core::path::AbsPath;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cwd = AbsPath::new("/home/user/docs".into())?;
//!
//! let a = cwd.resolve("a.txt");
//! let b = cwd.resolve("./notes/../a.txt");
//! assert_eq!(a, b);
//! assert_eq!(a.as_path(), std::path::Path::new("/home/user/docs/a.txt"));
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Extension accepted by the text-file operations
pub const TEXT_EXTENSION: &str = "txt";

/// An absolute, lexically normalised filesystem path
///
/// Construction always normalises, so equality of two `AbsPath` values is the
/// canonical-path-string comparison used for the copy/move distinctness check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsPath(PathBuf);

impl AbsPath {
    /// Create a new `AbsPath` from a `PathBuf`
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use fmsh_core::path::AbsPath;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let abs = AbsPath::new("/srv/./data/../logs".into())?;
    /// assert_eq!(abs.as_path(), std::path::Path::new("/srv/logs"));
    ///
    /// assert!(AbsPath::new("relative/path".into()).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.is_absolute() {
            Ok(AbsPath(normalize(&path)))
        } else {
            Err(Error::PathNotAbsolute { path })
        }
    }

    /// Resolve the process working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> Result<Self> {
        Self::new(std::env::current_dir()?)
    }

    /// Resolve a user-typed argument against this directory
    ///
    /// A leading `~` is expanded to the home directory. Absolute arguments
    /// replace the base entirely.
    pub fn resolve(&self, arg: &str) -> AbsPath {
        let expanded = expand_tilde(Path::new(arg));
        AbsPath(normalize(&self.0.join(expanded)))
    }

    /// Get the underlying `Path`
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Get the parent directory
    ///
    /// Returns `None` if this is the root directory.
    pub fn parent(&self) -> Option<Self> {
        self.0.parent().map(|p| AbsPath(p.to_path_buf()))
    }

}

impl fmt::Display for AbsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for AbsPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Lexically normalise a path
///
/// Drops `.` segments and folds `..` into the preceding segment. A `..` at the
/// root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

/// Expand tilde (~) in a path to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    // Early return for common case (no tilde) - avoids string conversion
    if !path.as_os_str().as_encoded_bytes().starts_with(b"~") {
        return path.to_path_buf();
    }

    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    match path.to_str() {
        Some("~") => home,
        Some(s) if s.starts_with("~/") || s.starts_with("~\\") => home.join(&s[2..]),
        _ => path.to_path_buf(),
    }
}

/// Whether the argument names a file with the `.txt` extension
///
/// The comparison is case-sensitive.
pub fn has_text_extension(arg: &str) -> bool {
    Path::new(arg)
        .extension()
        .is_some_and(|ext| ext == TEXT_EXTENSION)
}

/// Whether the final segment of the argument is a non-empty file name
///
/// `dir/`, `dir/.`, `.`, `..` and the root have no file name. The raw text is
/// inspected because [`Path::components`] drops a trailing `.`.
pub fn has_file_name(arg: &str) -> bool {
    arg.rsplit(std::path::is_separator)
        .next()
        .is_some_and(|last| !matches!(last, "" | "." | ".."))
}
