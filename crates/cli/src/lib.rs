//! fmsh CLI library
//!
//! Command-line handling and terminal wiring for the fmsh shell. The shell
//! itself lives in `fmsh-engine`; this crate picks the start directory, sets
//! up logging and hands a terminal console to the session loop.

pub mod logging;
pub mod ui;

use anyhow::{Context, Result, bail};
use clap::Parser;
use fmsh_core::path::AbsPath;
use fmsh_engine::{Session, run_session};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use ui::TerminalConsole;

/// fmsh - an interactive file management shell
#[derive(Parser, Debug)]
#[command(name = "fmsh")]
#[command(about = "Interactive shell for everyday file management")]
#[command(version)]
#[command(long_about = "Interactive shell for everyday file management

Reads one command per line, checks it before touching anything and reports
why a command was refused. Type `help` inside the shell for the list of
commands and `exit` (or end of input) to leave.")]
pub struct Cli {
    /// Directory to start the session in (defaults to the current directory)
    #[arg(short = 'C', long = "dir", env = "FMSH_START_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "FMSH_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Run an interactive session with the given arguments
pub fn run(cli: Cli) -> Result<()> {
    crate::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let start_dir = resolve_start_dir(cli.dir.as_deref())?;
    tracing::debug!(start_dir = %start_dir, "Starting session");

    let mut session = Session::new(start_dir);
    let mut console = TerminalConsole::new();

    if std::io::stdin().is_terminal() {
        println!("{}", ui::banner());
    }

    run_session(&mut session, &mut console).context("Session ended unexpectedly")?;

    Ok(())
}

/// Determine the absolute directory the session starts in
///
/// A relative `--dir` is taken relative to the process's current directory.
pub fn resolve_start_dir(dir: Option<&Path>) -> Result<AbsPath> {
    let cwd = AbsPath::current_dir().context("Failed to determine current directory")?;

    let start = match dir {
        Some(dir) => AbsPath::new(cwd.as_path().join(dir))
            .with_context(|| format!("Invalid start directory {}", dir.display()))?,
        None => cwd,
    };

    if !start.as_path().is_dir() {
        bail!("Start directory does not exist: {start}");
    }

    Ok(start)
}
