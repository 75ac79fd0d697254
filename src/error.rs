//! Error taxonomy for manifest resolution, planning, and materialization.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a filesystem entry prevented materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionReason {
    /// Something already exists at the artifact's own path.
    ArtifactExists,
    /// A file sits where an intermediate directory is needed.
    DirectoryBlocked,
}

impl fmt::Display for CollisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactExists => f.write_str("artifact already exists"),
            Self::DirectoryBlocked => f.write_str("a file blocks the directory"),
        }
    }
}

/// Errors raised while generating an artifact.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The manifest file could not be read.
    #[error("cannot read manifest {}: {source}", path.display())]
    ManifestUnreadable {
        /// Manifest location.
        path: PathBuf,
        /// Underlying read failure.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not JSON or lacks an `autoload.psr-4` object.
    #[error("malformed manifest {}: {reason}", path.display())]
    ManifestMalformed {
        /// Manifest location.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// The logical name cannot be turned into a path.
    #[error("invalid name `{name}`: {reason}")]
    InvalidName {
        /// The name as supplied.
        name: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// An incompatible entry already exists on the planned path.
    #[error("{reason} at {}", path.display())]
    Collision {
        /// The conflicting path.
        path: PathBuf,
        /// Which kind of conflict occurred.
        reason: CollisionReason,
    },

    /// A built-in template failed to render.
    #[error("failed to render {template} template: {source}")]
    Render {
        /// Template name.
        template: &'static str,
        /// Underlying template error.
        #[source]
        source: minijinja::Error,
    },

    /// Directory or file creation was refused by the filesystem.
    #[error("failed to create {}: {source}", path.display())]
    Io {
        /// The path being created.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Returns `true` for either flavor of collision.
    #[must_use]
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }
}

/// Result alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_message_names_the_path() {
        let err = ScaffoldError::Collision {
            path: PathBuf::from("app/Providers/AppProvider.php"),
            reason: CollisionReason::ArtifactExists,
        };
        assert_eq!(err.to_string(), "artifact already exists at app/Providers/AppProvider.php");
        assert!(err.is_collision());
    }

    #[test]
    fn invalid_name_is_not_a_collision() {
        let err = ScaffoldError::InvalidName { name: String::new(), reason: "name is empty" };
        assert!(!err.is_collision());
        assert_eq!(err.to_string(), "invalid name ``: name is empty");
    }
}
