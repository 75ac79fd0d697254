//! Directory-tree materialization for planned artifact paths.
//!
//! Directories along the way are created on demand and reused when present.
//! The artifact file itself is created with an exclusive create, so it is
//! written at most once and never overwritten. Nothing is rolled back on
//! failure: directories created before the failing step stay in place.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CollisionReason, Result, ScaffoldError};
use crate::planner::PlannedPath;
use crate::ports::{EntryKind, FileSystem};

/// Outcome of a successful materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Absolute path of the written file.
    pub file: PathBuf,
    /// Directories this call created, outermost first.
    pub created_dirs: Vec<PathBuf>,
}

/// Creates the directories of `planned` under `root` and writes `contents`
/// to its final segment.
///
/// # Errors
///
/// - [`ScaffoldError::Collision`] with [`CollisionReason::DirectoryBlocked`]
///   if a file occupies a directory segment.
/// - [`ScaffoldError::Collision`] with [`CollisionReason::ArtifactExists`]
///   if anything already exists at the file's path.
/// - [`ScaffoldError::Io`] for any other filesystem failure.
pub fn materialize(
    fs: &dyn FileSystem,
    root: &Path,
    planned: &PlannedPath,
    contents: &str,
) -> Result<Materialized> {
    let Some((leaf, dirs)) = planned.segments().split_last() else {
        let name = planned.relative().display().to_string();
        return Err(ScaffoldError::InvalidName { name, reason: "nothing to create" });
    };

    let mut current = root.to_path_buf();
    let mut created_dirs = Vec::new();

    for segment in dirs {
        current.push(segment);
        if ensure_dir(fs, &current)? {
            created_dirs.push(current.clone());
        }
    }

    current.push(leaf);
    fs.create_new(&current, contents).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            let reason = CollisionReason::ArtifactExists;
            ScaffoldError::Collision { path: current.clone(), reason }
        } else {
            ScaffoldError::Io { path: current.clone(), source }
        }
    })?;
    tracing::info!(path = %current.display(), "wrote artifact");

    Ok(Materialized { file: current, created_dirs })
}

/// Makes sure `path` is a directory. Returns `true` if it had to be created.
fn ensure_dir(fs: &dyn FileSystem, path: &Path) -> Result<bool> {
    let blocked = || ScaffoldError::Collision {
        path: path.to_path_buf(),
        reason: CollisionReason::DirectoryBlocked,
    };

    match fs.entry_kind(path) {
        Some(EntryKind::Dir) => {
            tracing::debug!(path = %path.display(), "reusing directory");
            Ok(false)
        }
        Some(EntryKind::File) => Err(blocked()),
        None => match fs.create_dir(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "created directory");
                Ok(true)
            }
            // Lost a race with another writer; fine as long as it made a directory.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => match fs.entry_kind(path) {
                Some(EntryKind::Dir) => Ok(false),
                _ => Err(blocked()),
            },
            Err(source) => Err(ScaffoldError::Io { path: path.to_path_buf(), source }),
        },
    }
}
