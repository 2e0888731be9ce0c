//! Command line parsing
//!
//! A line is split on runs of whitespace into an operation token and its
//! arguments. There is no quoting or escaping, so an argument can never
//! contain whitespace.

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Operation token, not yet checked against the registry
    pub name: String,
    /// Arguments in the order typed
    pub args: Vec<String>,
}

impl Command {
    /// Parse a raw input line
    ///
    /// Returns `None` for empty or whitespace-only input, which the caller
    /// answers by prompting again rather than reporting an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fmsh_engine::parser::Command;
    ///
    /// let cmd = Command::parse("  copy   a.txt\tb.txt ").unwrap();
    /// assert_eq!(cmd.name, "copy");
    /// assert_eq!(cmd.args, vec!["a.txt", "b.txt"]);
    ///
    /// assert!(Command::parse("   ").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }

    /// Number of arguments after the operation token
    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}
