//! Logging configuration for the fmsh CLI
//!
//! Log lines go to stderr so they never interleave with listings and file
//! contents on stdout. An optional log file receives everything at debug
//! level.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_file` - Optional path to write logs to a file
///
/// `RUST_LOG`, when set, overrides the level chosen by `verbose`.
///
/// # Examples
/// ```ignore
/// // Warnings only
/// init(false, None)?;
///
/// // Verbose mode with a log file
/// init(true, Some(Path::new("fmsh.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .context("Failed to build log filter")?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true);

    // Timestamps only in verbose mode
    let stderr_layer = if verbose {
        stderr_layer.with_filter(env_filter).boxed()
    } else {
        stderr_layer.without_time().with_filter(env_filter).boxed()
    };

    let file_layer = match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::try_new("debug").context("Invalid file log filter")?),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}

fn default_directives(level: &str) -> String {
    format!("fmsh={level},fmsh_engine={level},fmsh_core={level}")
}
