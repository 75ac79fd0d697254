//! Manifest reading and root-namespace resolution.
//!
//! The manifest is a Composer-style `composer.json`. Only its
//! `autoload.psr-4` object is consulted: each key is a namespace prefix and
//! each value the directory (or list of directories) it maps to.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ScaffoldError};
use crate::ports::FileSystem;

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "composer.json";

/// Directory marker identifying the application namespace.
pub const APP_MARKER: &str = "app/";

/// Directory marker identifying the bootstrap namespace.
pub const BOOTSTRAP_MARKER: &str = "bootstrap/";

#[derive(Debug, Deserialize)]
struct Manifest {
    autoload: Autoload,
}

#[derive(Debug, Deserialize)]
struct Autoload {
    #[serde(rename = "psr-4")]
    psr4: BTreeMap<String, Directories>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Directories {
    One(String),
    Many(Vec<String>),
}

impl Directories {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(dir) => vec![dir],
            Self::Many(dirs) => dirs,
        }
    }
}

/// Namespace prefixes mapped to the directories they autoload from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestMapping {
    entries: BTreeMap<String, Vec<String>>,
}

impl ManifestMapping {
    /// Parses a manifest document.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ManifestMalformed`] if `contents` is not JSON
    /// or has no `autoload.psr-4` object of string or string-array values.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(contents).map_err(|e| {
            ScaffoldError::ManifestMalformed { path: path.to_path_buf(), reason: e.to_string() }
        })?;
        let entries = manifest
            .autoload
            .psr4
            .into_iter()
            .map(|(prefix, dirs)| (prefix, dirs.into_vec()))
            .collect();
        Ok(Self { entries })
    }

    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ManifestUnreadable`] if the file cannot be
    /// read, or [`ScaffoldError::ManifestMalformed`] if it cannot be parsed.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let contents = fs.read_to_string(path).map_err(|source| {
            ScaffoldError::ManifestUnreadable { path: path.to_path_buf(), source }
        })?;
        Self::parse(path, &contents)
    }

    /// Returns the namespace prefix whose directory equals `marker`.
    ///
    /// A missing trailing `/` on either side is ignored. When several
    /// prefixes match, the first in lexical order wins.
    #[must_use]
    pub fn namespace_for(&self, marker: &str) -> Option<&str> {
        let wanted = marker.trim_end_matches('/');
        self.entries
            .iter()
            .find(|(_, dirs)| dirs.iter().any(|dir| dir.trim_end_matches('/') == wanted))
            .map(|(prefix, _)| prefix.as_str())
    }
}

/// The two root namespaces the generators build on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootNamespaces {
    /// Prefix mapped to `app/`.
    pub app: Option<String>,
    /// Prefix mapped to `bootstrap/`.
    pub bootstrap: Option<String>,
}

impl RootNamespaces {
    /// Extracts the application and bootstrap prefixes from a mapping.
    #[must_use]
    pub fn from_mapping(mapping: &ManifestMapping) -> Self {
        Self {
            app: mapping.namespace_for(APP_MARKER).map(String::from),
            bootstrap: mapping.namespace_for(BOOTSTRAP_MARKER).map(String::from),
        }
    }
}

/// Reads the manifest under `root` and resolves its root namespaces.
///
/// Absent markers resolve to `None`; deciding whether that is acceptable is
/// left to the caller.
///
/// # Errors
///
/// Returns [`ScaffoldError::ManifestUnreadable`] or
/// [`ScaffoldError::ManifestMalformed`].
pub fn resolve(fs: &dyn FileSystem, root: &Path) -> Result<RootNamespaces> {
    let path = root.join(MANIFEST_FILE);
    let mapping = ManifestMapping::load(fs, &path)?;
    let namespaces = RootNamespaces::from_mapping(&mapping);
    tracing::debug!(
        manifest = %path.display(),
        app = namespaces.app.as_deref().unwrap_or("<none>"),
        bootstrap = namespaces.bootstrap.as_deref().unwrap_or("<none>"),
        "resolved root namespaces"
    );
    Ok(namespaces)
}
