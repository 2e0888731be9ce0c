//! Navigation and listing: `cd`, `dir`, `dirrec`, `drives`

use super::{arg, dir_entry, file_entry};
use crate::error::{Error, Result};
use crate::operation::Flow;
use crate::session::Session;
use crate::system;
use comfy_table::Table;
use fmsh_core::Console;
use fmsh_core::path::AbsPath;
use fmsh_core::platform;
use std::fs;
use walkdir::WalkDir;

/// `cd <dir>`
pub fn cd(session: &mut Session, args: &[String], _console: &mut dyn Console) -> Result<Flow> {
    let target = session.resolve(arg(args, 0));
    session.change_dir(target);
    Ok(Flow::Continue)
}

/// `dir [path]`
pub fn dir(session: &mut Session, args: &[String], console: &mut dyn Console) -> Result<Flow> {
    let target = target_dir(session, args);
    for line in list_directory(&target)? {
        console.write_line(&line)?;
    }
    Ok(Flow::Continue)
}

/// `dirrec [path]`
pub fn dirrec(session: &mut Session, args: &[String], console: &mut dyn Console) -> Result<Flow> {
    let target = target_dir(session, args);
    for line in list_tree(&target, session.start_dir())? {
        console.write_line(&line)?;
    }
    Ok(Flow::Continue)
}

/// `drives`
pub fn drives(_session: &mut Session, _args: &[String], console: &mut dyn Console) -> Result<Flow> {
    let mut table = Table::new();
    table.set_header(vec!["Drive", "Type", "Total", "Free"]);
    for drive in platform::drives() {
        table.add_row(vec![
            drive.mount_point.display().to_string(),
            drive.fs_type.unwrap_or_else(|| "-".to_string()),
            format_bytes(drive.total_bytes),
            format_bytes(drive.free_bytes),
        ]);
    }
    console.write_line(&table.to_string())?;
    Ok(Flow::Continue)
}

fn target_dir(session: &Session, args: &[String]) -> AbsPath {
    match args.first() {
        Some(path) => session.resolve(path),
        None => session.cwd().clone(),
    }
}

fn format_bytes(bytes: Option<u64>) -> String {
    bytes.map_or_else(|| "-".to_string(), |n| format!("{n} b"))
}

/// One level of a directory: subdirectories first, then files, each sorted
/// by name
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_directory(dir: &AbsPath) -> Result<Vec<String>> {
    let read_error = |source| Error::DirectoryRead {
        path: dir.clone(),
        source,
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = AbsPath::new(entry.path())?;

        // Broken symlinks fall back to the link's own metadata
        let meta = match system::metadata(&path) {
            Ok(meta) => meta,
            Err(_) => entry.metadata().map_err(|source| Error::Metadata {
                path: path.clone(),
                source,
            })?,
        };

        if meta.is_dir() {
            dirs.push(name);
        } else {
            files.push((name, meta.len()));
        }
    }

    dirs.sort();
    files.sort();

    Ok(dirs
        .iter()
        .map(|name| dir_entry(name))
        .chain(files.iter().map(|(name, size)| file_entry(name, *size)))
        .collect())
}

/// Depth-first listing of everything under `root`
///
/// Entries are shown relative to `anchor` (the session start directory) when
/// they lie under it, and as absolute paths otherwise.
///
/// # Errors
///
/// Returns an error if `root` or any directory below it cannot be read.
pub fn list_tree(root: &AbsPath, anchor: &AbsPath) -> Result<Vec<String>> {
    let walk_error = |source| Error::Walk {
        path: root.clone(),
        source,
    };

    let mut lines = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(walk_error)?;
        let path = entry.path();
        let shown = path
            .strip_prefix(anchor.as_path())
            .unwrap_or(path)
            .display()
            .to_string();

        if entry.file_type().is_dir() {
            lines.push(dir_entry(&shown));
        } else {
            let size = entry.metadata().map_err(walk_error)?.len();
            lines.push(file_entry(&shown, size));
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::console::MemoryConsole;
    use tempfile::TempDir;

    fn tree() -> (TempDir, AbsPath) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "12345").unwrap();
        fs::write(dir.path().join("a.bin"), [0u8; 3]).unwrap();
        fs::create_dir_all(dir.path().join("zeta/inner")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("zeta/inner/deep.txt"), "x").unwrap();
        let root = AbsPath::new(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_list_directory_order_and_format() {
        let (_dir, root) = tree();
        assert_eq!(
            list_directory(&root).unwrap(),
            vec!["alpha/", "zeta/", "a.bin (3 b)", "b.txt (5 b)"]
        );
    }

    #[test]
    fn test_list_directory_missing() {
        let (_dir, root) = tree();
        let err = list_directory(&root.resolve("nope")).unwrap_err();
        assert!(matches!(err, Error::DirectoryRead { .. }));
    }

    #[test]
    fn test_list_tree_relative_to_anchor() {
        let (_dir, root) = tree();
        let lines = list_tree(&root.resolve("zeta"), &root).unwrap();
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            lines,
            vec![
                format!("zeta{sep}inner/"),
                format!("zeta{sep}inner{sep}deep.txt (1 b)"),
            ]
        );
    }

    #[test]
    fn test_list_tree_outside_anchor_is_absolute() {
        let (_dir, root) = tree();
        let inner = root.resolve("zeta/inner");
        let anchor = root.resolve("alpha");
        let lines = list_tree(&inner, &anchor).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(&root.to_string()));
        assert!(lines[0].ends_with("deep.txt (1 b)"));
    }

    #[test]
    fn test_cd_changes_cwd_only() {
        let (_dir, root) = tree();
        let mut session = Session::new(root.clone());
        let mut console = MemoryConsole::new();

        let flow = cd(&mut session, &["zeta".to_string()], &mut console).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(session.cwd(), &root.resolve("zeta"));
        assert_eq!(session.start_dir(), &root);
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_dir_defaults_to_cwd() {
        let (_dir, root) = tree();
        let mut session = Session::new(root.resolve("zeta"));
        let mut console = MemoryConsole::new();

        dir(&mut session, &[], &mut console).unwrap();

        assert_eq!(console.output(), "inner/\n");
    }

    #[test]
    fn test_drives_prints_table() {
        let (_dir, root) = tree();
        let mut session = Session::new(root);
        let mut console = MemoryConsole::new();

        drives(&mut session, &[], &mut console).unwrap();

        assert!(console.output().contains("Drive"));
        assert!(console.output().contains("Free"));
    }
}
