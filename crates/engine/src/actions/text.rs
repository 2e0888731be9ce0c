//! Text file operations: `print`, `create`, `concat`

use super::arg;
use super::files::confirm_overwrite;
use crate::error::Result;
use crate::operation::Flow;
use crate::session::Session;
use crate::system;
use fmsh_core::{Console, TextEncoding};
use tracing::info;

/// `print <file.txt> [encoding]`
pub fn print(session: &mut Session, args: &[String], console: &mut dyn Console) -> Result<Flow> {
    let path = session.resolve(arg(args, 0));
    let encoding = encoding_arg(args, 1);

    let bytes = system::read_file(&path)?;
    write_text(console, &encoding.decode(&bytes))?;
    Ok(Flow::Continue)
}

/// `create <file.txt> [encoding]`
///
/// Reads a single line from the console and writes it as the file's content.
pub fn create(session: &mut Session, args: &[String], console: &mut dyn Console) -> Result<Flow> {
    let path = session.resolve(arg(args, 0));
    let encoding = encoding_arg(args, 1);

    if !confirm_overwrite(&path, console)? {
        console.write_line("Cancelled.")?;
        return Ok(Flow::Continue);
    }

    console.write_line("Enter text:")?;
    let text = console.read_line()?.unwrap_or_default();
    system::write_file(&path, &encoding.encode(&text))?;

    info!(path = %path, %encoding, bytes = text.len(), "Created file");
    Ok(Flow::Continue)
}

/// `concat <file.txt> <file.txt> [...]`
pub fn concat(session: &mut Session, args: &[String], console: &mut dyn Console) -> Result<Flow> {
    // Read everything first so a vanished file doesn't leave partial output
    let texts = args
        .iter()
        .map(|value| {
            let bytes = system::read_file(&session.resolve(value))?;
            Ok(TextEncoding::Utf8.decode(&bytes))
        })
        .collect::<Result<Vec<_>>>()?;

    for text in &texts {
        write_text(console, text)?;
    }
    Ok(Flow::Continue)
}

/// Encoding named at `index`, defaulting to UTF-8 when absent
fn encoding_arg(args: &[String], index: usize) -> TextEncoding {
    args.get(index)
        .and_then(|name| TextEncoding::from_name(name))
        .unwrap_or_default()
}

/// Write file text, terminating the last line if the file didn't
fn write_text(console: &mut dyn Console, text: &str) -> Result<()> {
    console.write(text)?;
    if !text.is_empty() && !text.ends_with('\n') {
        console.write("\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::console::MemoryConsole;
    use fmsh_core::path::AbsPath;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("one.txt"), "first\n").unwrap();
        fs::write(dir.path().join("two.txt"), "second").unwrap();
        let session = Session::new(AbsPath::new(dir.path().to_path_buf()).unwrap());
        (dir, session)
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_print_default_utf8() {
        let (_dir, mut session) = setup();
        let mut console = MemoryConsole::new();

        print(&mut session, &args(&["two.txt"]), &mut console).unwrap();

        assert_eq!(console.output(), "second\n");
    }

    #[test]
    fn test_print_with_encoding() {
        let (dir, mut session) = setup();
        fs::write(dir.path().join("wide.txt"), TextEncoding::Utf16.encode("wide")).unwrap();
        let mut console = MemoryConsole::new();

        print(&mut session, &args(&["wide.txt", "utf-16"]), &mut console).unwrap();

        assert_eq!(console.output(), "wide\n");
    }

    #[test]
    fn test_create_default_encoding() {
        let (dir, mut session) = setup();
        let mut console = MemoryConsole::with_input(["hello"]);

        create(&mut session, &args(&["note.txt"]), &mut console).unwrap();

        assert_eq!(fs::read(dir.path().join("note.txt")).unwrap(), b"hello");
        assert!(console.output().contains("Enter text:"));
    }

    #[test]
    fn test_create_with_encoding() {
        let (dir, mut session) = setup();
        let mut console = MemoryConsole::with_input(["hi"]);

        create(&mut session, &args(&["w.txt", "UTF-32"]), &mut console).unwrap();

        assert_eq!(
            fs::read(dir.path().join("w.txt")).unwrap(),
            TextEncoding::Utf32.encode("hi")
        );
    }

    #[test]
    fn test_create_existing_declined() {
        let (dir, mut session) = setup();
        let mut console = MemoryConsole::with_input(["ignored"]);

        create(&mut session, &args(&["one.txt"]), &mut console).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("one.txt")).unwrap(),
            "first\n"
        );
        assert_eq!(console.prompts().len(), 1);
    }

    #[test]
    fn test_create_missing_parent_is_fault() {
        let (_dir, mut session) = setup();
        let mut console = MemoryConsole::with_input(["text"]);

        let err = create(&mut session, &args(&["nope/x.txt"]), &mut console).unwrap_err();

        assert!(err.to_string().contains("x.txt"));
    }

    #[test]
    fn test_concat_in_argument_order() {
        let (_dir, mut session) = setup();
        let mut console = MemoryConsole::new();

        concat(&mut session, &args(&["two.txt", "one.txt"]), &mut console).unwrap();

        assert_eq!(console.output(), "second\nfirst\n");
    }

    #[test]
    fn test_concat_vanished_file_prints_nothing() {
        let (dir, mut session) = setup();
        fs::remove_file(dir.path().join("two.txt")).unwrap();
        let mut console = MemoryConsole::new();

        assert!(concat(&mut session, &args(&["one.txt", "two.txt"]), &mut console).is_err());
        assert!(console.output().is_empty());
    }
}
