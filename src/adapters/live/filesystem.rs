//! Live filesystem adapter using `std::fs`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::ports::filesystem::{EntryKind, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let meta = std::fs::metadata(path).ok()?;
        Some(if meta.is_dir() { EntryKind::Dir } else { EntryKind::File })
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        create_exclusive(path, |file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        })
    }
}

/// Creates `path` exclusively and fills it with `fill`.
///
/// A file that was created but could not be filled is removed again, so a
/// failed write never leaves a partial artifact behind.
fn create_exclusive(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let Err(err) = fill(&mut file) else {
        return Ok(());
    };
    drop(file);
    if let Err(cleanup) = std::fs::remove_file(path) {
        tracing::error!(
            path = %path.display(),
            error = %cleanup,
            "could not remove partially written file"
        );
    }
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_new_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Existing.php");
        std::fs::write(&path, "original").unwrap();

        let err = LiveFileSystem.create_new(&path, "replacement").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn failed_fill_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Big.php");

        let err = create_exclusive(&path, |file| {
            file.write_all(b"<?php\nclass Bi")?;
            Err(io::Error::other("disk full"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!path.exists());

        LiveFileSystem.create_new(&path, "<?php\nclass Big {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<?php\nclass Big {}\n");
    }

    #[test]
    fn entry_kind_distinguishes_files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        let fs = LiveFileSystem;
        assert_eq!(fs.entry_kind(dir.path()), Some(EntryKind::Dir));
        assert_eq!(fs.entry_kind(&file), Some(EntryKind::File));
        assert_eq!(fs.entry_kind(&dir.path().join("missing")), None);
    }
}
