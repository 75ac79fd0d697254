//! In-memory filesystem adapter.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::ports::filesystem::{EntryKind, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    File(String),
    Dir,
}

/// Filesystem held entirely in memory.
///
/// Directories are explicit entries, so creating a child under a missing
/// parent fails the same way it does on disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory and all of its missing ancestors.
    pub fn add_dir_all(&self, path: &Path) {
        let mut nodes = self.lock();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    /// Adds a file, creating missing ancestors and replacing any prior file.
    pub fn add_file(&self, path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        self.lock().insert(path.to_path_buf(), Node::File(contents.to_string()));
    }

    /// Returns the contents of a file, if one exists at `path`.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        match self.lock().get(path) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    /// Returns every file path currently stored, sorted.
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        self.lock()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, Node>> {
        // A poisoned map is still structurally valid.
        self.nodes.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check_parent(nodes: &BTreeMap<PathBuf, Node>, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Ok(()),
            None => Ok(()),
            Some(parent) => match nodes.get(parent) {
                Some(Node::Dir) => Ok(()),
                Some(Node::File(_)) => {
                    Err(io::Error::other(format!("not a directory: {}", parent.display())))
                }
                None => Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {}", parent.display()),
                )),
            },
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.lock().get(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Dir) => {
                Err(io::Error::other(format!("is a directory: {}", path.display())))
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )),
        }
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        self.lock().get(path).map(|node| match node {
            Node::File(_) => EntryKind::File,
            Node::Dir => EntryKind::Dir,
        })
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.lock();
        if nodes.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("already exists: {}", path.display()),
            ));
        }
        Self::check_parent(&nodes, path)?;
        nodes.insert(path.to_path_buf(), Node::Dir);
        Ok(())
    }

    fn create_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut nodes = self.lock();
        if nodes.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("already exists: {}", path.display()),
            ));
        }
        Self::check_parent(&nodes, path)?;
        nodes.insert(path.to_path_buf(), Node::File(contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFileSystem::new();
        let err = fs.create_dir(Path::new("/project/app")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.add_dir_all(Path::new("/project"));
        fs.create_dir(Path::new("/project/app")).unwrap();
        assert_eq!(fs.entry_kind(Path::new("/project/app")), Some(EntryKind::Dir));
    }

    #[test]
    fn create_new_is_exclusive() {
        let fs = MemoryFileSystem::new();
        fs.add_dir_all(Path::new("/p"));
        fs.create_new(Path::new("/p/A.php"), "first").unwrap();

        let err = fs.create_new(Path::new("/p/A.php"), "second").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs.file(Path::new("/p/A.php")).as_deref(), Some("first"));
    }

    #[test]
    fn add_file_creates_ancestors() {
        let fs = MemoryFileSystem::new();
        fs.add_file(Path::new("/root/composer.json"), "{}");
        assert_eq!(fs.entry_kind(Path::new("/root")), Some(EntryKind::Dir));
        assert_eq!(fs.read_to_string(Path::new("/root/composer.json")).unwrap(), "{}");
        assert_eq!(fs.files(), vec![PathBuf::from("/root/composer.json")]);
    }
}
