//! Core library entry for the `scaffold` CLI.
//!
//! Generates controller, middleware, and service-provider classes for a
//! PSR-4 project. The project's `composer.json` supplies the root namespace;
//! the class name and sub-namespaces come from the command line.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod generator;
pub mod logging;
pub mod manifest;
pub mod materialize;
pub mod planner;
pub mod ports;
pub mod template;

use std::fmt;

use clap::Parser;

pub use error::{CollisionReason, ScaffoldError};
pub use generator::{ArtifactKind, Generated, Generator};

/// Why a run failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The arguments were rejected; holds clap's usage message.
    Usage(String),
    /// A command failed; holds its single `Error: ...` line.
    Command(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(message) | Self::Command(message) => f.write_str(message),
        }
    }
}

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and count as success.
///
/// # Errors
///
/// Returns [`RunError::Usage`] when argument parsing fails and
/// [`RunError::Command`] when command execution fails.
pub fn run<I, T>(args: I) -> Result<(), RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(RunError::Usage(err.to_string())),
    };
    commands::dispatch(&cli).map_err(RunError::Command)
}

#[cfg(test)]
mod tests {
    use super::{run, RunError};

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["scaffold", "unknown"]);
        assert!(matches!(result, Err(RunError::Usage(_))));
    }

    #[test]
    fn run_errors_when_manifest_missing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();

        let result = run(["scaffold", "--root", root, "make:provider", "RouteProvider"]);
        let Err(RunError::Command(line)) = result else {
            panic!("expected a command failure, got {result:?}");
        };
        assert!(line.starts_with("Error: cannot read manifest"));
        assert!(!dir.path().join("app").exists());
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(run(["scaffold", "--help"]).is_ok());
    }
}
