//! Thin filesystem wrappers
//!
//! Each function performs one `std::fs` call and maps the I/O error into an
//! [`Error`] variant naming the path(s) involved, so a fault printed at the
//! session prompt says what was being touched.

use crate::error::{Error, Result};
use fmsh_core::path::AbsPath;
use std::fs::{self, Metadata};
use std::io;

/// Read a file's contents
pub fn read_file(path: &AbsPath) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::FileRead {
        path: path.clone(),
        source,
    })
}

/// Write a file's contents, replacing any existing file
pub fn write_file(path: &AbsPath, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::FileWrite {
        path: path.clone(),
        source,
    })
}

/// Remove a single file
pub fn remove_file(path: &AbsPath) -> Result<()> {
    fs::remove_file(path).map_err(|source| Error::FileRemove {
        path: path.clone(),
        source,
    })
}

/// Create the parent directory of `path` (and its ancestors) if missing
pub fn create_parent_dirs(path: &AbsPath) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_path().is_dir() {
        return Ok(());
    }
    tracing::debug!(path = %parent, "Creating parent directory");
    fs::create_dir_all(&parent).map_err(|source| Error::DirectoryCreate {
        path: parent,
        source,
    })
}

/// Copy a file, replacing the destination if it exists
pub fn copy_file(from: &AbsPath, to: &AbsPath) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| Error::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })
}

/// Move a file, replacing the destination if it exists
///
/// A rename across filesystems falls back to copy followed by remove.
pub fn move_file(from: &AbsPath, to: &AbsPath) -> Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(from = %from, to = %to, "Rename crosses devices, copying instead");
            copy_file(from, to)?;
            remove_file(from)
        }
        Err(source) => Err(Error::Move {
            from: from.clone(),
            to: to.clone(),
            source,
        }),
    }
}

/// Metadata following symlinks
pub fn metadata(path: &AbsPath) -> Result<Metadata> {
    fs::metadata(path).map_err(|source| Error::Metadata {
        path: path.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tempfile::TempDir;

    fn abs(dir: &TempDir, rel: &str) -> AbsPath {
        AbsPath::new(dir.path().join(rel)).unwrap()
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = abs(&dir, "f.txt");
        write_file(&path, b"data").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"data");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = abs(&dir, "missing.txt");
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_create_parent_dirs_nested() {
        let dir = TempDir::new().unwrap();
        let path = abs(&dir, "a/b/c.txt");
        create_parent_dirs(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
        assert!(!dir.path().join("a/b/c.txt").exists());
    }

    #[test]
    fn test_move_replaces_destination() {
        let dir = TempDir::new().unwrap();
        let from = abs(&dir, "from.txt");
        let to = abs(&dir, "to.txt");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        move_file(&from, &to).unwrap();

        assert!(!from.as_path().exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn test_copy_keeps_source() {
        let dir = TempDir::new().unwrap();
        let from = abs(&dir, "from.txt");
        let to = abs(&dir, "to.txt");
        fs::write(&from, "same").unwrap();

        copy_file(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&from).unwrap(), "same");
        assert_eq!(fs::read_to_string(&to).unwrap(), "same");
    }

    #[test]
    fn test_remove_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = remove_file(&abs(&dir, "nope")).unwrap_err();
        assert!(matches!(err, Error::FileRemove { .. }));
    }
}
