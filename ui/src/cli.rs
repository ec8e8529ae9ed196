//! Command-line arguments of `todo-master-cli`.
//!
//! ```text
//! todo-master-cli [--filter all|active|completed] [--search TEXT] [TITLE...]
//! ```
//!
//! Words that are not flags make up the title of a todo to add. `--` ends
//! flag parsing, so `-- --filter` adds a todo titled "--filter".

use crate::filter::{FilterMode, ParseFilterModeError};
use thiserror::Error;

/// Errors from [`CliArgs::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag was given without its value
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    /// `--filter` named an unknown mode
    #[error(transparent)]
    InvalidFilter(#[from] ParseFilterModeError),
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Filter applied to the printed list
    pub filter: FilterMode,
    /// Search text applied to the printed list
    pub search: Option<String>,
    /// Title to add before printing; empty when nothing should be added
    pub title: String,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    ///
    /// Both `--filter active` and `--filter=active` are accepted, likewise
    /// for `--search`. A repeated flag overrides the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if a flag has no value or the filter is unknown.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut words = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--" => {
                    words.extend(args.by_ref());
                }
                "--filter" => {
                    let value = args.next().ok_or(CliError::MissingValue("--filter"))?;
                    parsed.filter = value.parse()?;
                }
                "--search" => {
                    let value = args.next().ok_or(CliError::MissingValue("--search"))?;
                    parsed.search = Some(value);
                }
                _ => {
                    if let Some(value) = arg.strip_prefix("--filter=") {
                        parsed.filter = value.parse()?;
                    } else if let Some(value) = arg.strip_prefix("--search=") {
                        parsed.search = Some(value.to_string());
                    } else {
                        words.push(arg);
                    }
                }
            }
        }

        parsed.title = words.join(" ");
        Ok(parsed)
    }
}
