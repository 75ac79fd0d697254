//! Filesystem port for manifest reads and scaffold creation.

use std::io;
use std::path::Path;

/// What kind of entry occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Dir,
}

/// Provides the filesystem operations the generators need.
///
/// Abstracting the filesystem allows the materializer to be tested
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reports what exists at `path`, or `None` if nothing does.
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;

    /// Creates a single directory. The parent must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error with kind [`io::ErrorKind::AlreadyExists`] if the
    /// path is taken, or any other error the filesystem reports.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates a new file holding `contents`, failing if the path is taken.
    ///
    /// The existence check and the creation are a single atomic step.
    ///
    /// # Errors
    ///
    /// Returns an error with kind [`io::ErrorKind::AlreadyExists`] if
    /// anything exists at `path`, or any other error the filesystem reports.
    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()>;
}
