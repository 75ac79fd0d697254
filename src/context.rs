//! Service context bundling the filesystem port and the project root.

use std::path::{Path, PathBuf};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::memory::filesystem::MemoryFileSystem;
use crate::ports::filesystem::FileSystem;

/// Everything a command needs to touch the outside world.
///
/// Constructors wire up different adapter implementations (live, in-memory).
pub struct ServiceContext {
    /// Filesystem for manifest reads and artifact creation.
    pub fs: Box<dyn FileSystem>,
    /// Project root holding `composer.json` and `app/`.
    pub root: PathBuf,
}

impl ServiceContext {
    /// Creates a context from an explicit filesystem.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, root: PathBuf) -> Self {
        Self { fs, root }
    }

    /// Creates a live context operating on the real disk under `root`.
    #[must_use]
    pub fn live(root: &Path) -> Self {
        Self::new(Box::new(LiveFileSystem), root.to_path_buf())
    }

    /// Creates a context backed by an in-memory filesystem.
    #[must_use]
    pub fn in_memory(fs: MemoryFileSystem, root: &Path) -> Self {
        Self::new(Box::new(fs), root.to_path_buf())
    }

    /// Renders `path` relative to the project root when it lies beneath it.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root).unwrap_or(path).display().to_string()
    }
}
