//! `scaffold make:*` commands.

use crate::context::ServiceContext;
use crate::error::{CollisionReason, ScaffoldError};
use crate::generator::{ArtifactKind, Generator};

/// Execute one `make:*` command.
///
/// Prints a single success line naming the created file.
///
/// # Errors
///
/// Returns a single `Error: ...` line if the manifest cannot be resolved or
/// the artifact cannot be generated.
pub fn run(
    ctx: &ServiceContext,
    kind: ArtifactKind,
    name: &str,
    modifier: Option<&str>,
) -> Result<(), String> {
    let generator = Generator::new(ctx).map_err(|e| describe(ctx, kind, &e))?;
    let generated =
        generator.generate(kind, name, modifier).map_err(|e| describe(ctx, kind, &e))?;

    println!("Success: {kind} created at {}", generated.relative_path.display());
    Ok(())
}

/// Turns a domain error into the user-facing error line.
fn describe(ctx: &ServiceContext, kind: ArtifactKind, err: &ScaffoldError) -> String {
    let message = match err {
        ScaffoldError::Collision { path, reason: CollisionReason::ArtifactExists } => {
            format!("{kind} already exists at {}", ctx.display_path(path))
        }
        ScaffoldError::Collision { path, reason: CollisionReason::DirectoryBlocked } => {
            format!("cannot create directory {}: a file is in the way", ctx.display_path(path))
        }
        other => other.to_string(),
    };
    format!("Error: {message}")
}
