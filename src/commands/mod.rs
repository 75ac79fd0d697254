//! Command dispatch and handlers.

pub mod make;

use std::env;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::generator::ArtifactKind;

/// Dispatch a parsed command to its handler.
///
/// The project root is `--root` / `SCAFFOLD_ROOT` when given, otherwise the
/// current directory.
///
/// # Errors
///
/// Returns an error string if the project root cannot be determined or the
/// selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => current_dir()?,
    };
    tracing::debug!(root = %root.display(), "project root");

    let ctx = ServiceContext::live(&root);
    dispatch_with_context(&cli.command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns the handler's error line.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Controller(args) => {
            make::run(ctx, ArtifactKind::Controller, &args.name, args.kind.as_deref())
        }
        Command::Middleware(args) => {
            make::run(ctx, ArtifactKind::Middleware, &args.name, args.kind.as_deref())
        }
        Command::Provider(args) => {
            make::run(ctx, ArtifactKind::Provider, &args.name, args.kind.as_deref())
        }
    }
}

fn current_dir() -> Result<PathBuf, String> {
    env::current_dir().map_err(|e| format!("Error: failed to get current directory: {e}"))
}
