//! Path planning: logical names and type modifiers to file paths and namespaces.
//!
//! A logical name such as `Admin/UserController` splits into sub-namespace
//! segments (`Admin`) and a class name (`UserController`). The planned path
//! and the reconstructed namespace list those segments in the same order,
//! with the optional modifier label between the sub-namespaces and the
//! class. The autoloader resolves classes only when both orders agree.
//!
//! ```text
//! <base dirs>/<sub dirs>/<modifier>/<Class>.php
//! <root>\<suffix>\<sub ns>\<modifier>
//! ```

pub mod modifier;

use std::fmt;
use std::path::PathBuf;

use crate::error::{Result, ScaffoldError};

pub use modifier::TypeModifier;

/// Separator used between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// A validated, segmented artifact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalName {
    segments: Vec<String>,
}

impl LogicalName {
    /// Parses a user-supplied name.
    ///
    /// Both `/` and `\` separate segments. Surrounding whitespace is
    /// trimmed. Every segment must be a plain identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if the name is empty or any
    /// segment is empty or not an identifier.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason| ScaffoldError::InvalidName { name: input.to_string(), reason };

        if trimmed.is_empty() {
            return Err(invalid("name is empty"));
        }

        let segments: Vec<String> = trimmed
            .split(['/', NAMESPACE_SEPARATOR])
            .map(str::to_string)
            .collect();

        for segment in &segments {
            if segment.is_empty() {
                return Err(invalid("name contains an empty segment"));
            }
            if !is_identifier(segment) {
                return Err(invalid("segments must be identifiers (letters, digits, `_`)"));
            }
        }

        Ok(Self { segments })
    }

    /// The final segment, used as the class and file name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        // `parse` guarantees at least one segment.
        self.segments.last().map_or("", String::as_str)
    }

    /// All segments before the class name.
    #[must_use]
    pub fn sub_namespace(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Number of segments including the class name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; a parsed name has at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for LogicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Where one artifact kind lives on disk and in the namespace tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Directories under the project root, e.g. `["app", "Http", "Controllers"]`.
    pub base_dir: &'static [&'static str],
    /// Namespace segments appended to the root, e.g. `["Http", "Controllers"]`.
    pub namespace_suffix: &'static [&'static str],
    /// File extension without the dot.
    pub extension: &'static str,
}

/// Ordered path segments from the project root down to the artifact file.
///
/// Every segment but the last names a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPath {
    segments: Vec<String>,
}

impl PlannedPath {
    /// Builds a planned path from raw segments.
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The segments, directories first and the file name last.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path relative to the project root.
    #[must_use]
    pub fn relative(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

/// Everything needed to materialize and render one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Where the artifact goes.
    pub path: PlannedPath,
    /// Fully reconstructed namespace for the generated class.
    pub namespace: String,
    /// Class name, equal to the last segment of the logical name.
    pub class_name: String,
}

/// Plans the path and namespace for `name` within `layout`.
///
/// `root_namespace` is the manifest prefix for the artifact's tree; `None`
/// leaves the namespace starting at the layout's suffix.
#[must_use]
pub fn plan(
    name: &LogicalName,
    modifier: Option<TypeModifier>,
    layout: &Layout,
    root_namespace: Option<&str>,
) -> Plan {
    let label = modifier.map(TypeModifier::label);

    let mut segments: Vec<String> = layout.base_dir.iter().map(|s| (*s).to_string()).collect();
    segments.extend(name.sub_namespace().iter().cloned());
    segments.extend(label.map(String::from));
    segments.push(format!("{}.{}", name.class_name(), layout.extension));

    let root = root_namespace
        .map(|ns| ns.trim_matches(NAMESPACE_SEPARATOR))
        .filter(|ns| !ns.is_empty());
    let namespace_parts: Vec<&str> = root
        .into_iter()
        .chain(layout.namespace_suffix.iter().copied())
        .chain(name.sub_namespace().iter().map(String::as_str))
        .chain(label)
        .collect();

    Plan {
        path: PlannedPath::new(segments),
        namespace: namespace_parts.join(&NAMESPACE_SEPARATOR.to_string()),
        class_name: name.class_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROLLERS: Layout = Layout {
        base_dir: &["app", "Http", "Controllers"],
        namespace_suffix: &["Http", "Controllers"],
        extension: "php",
    };

    fn name(input: &str) -> LogicalName {
        LogicalName::parse(input).unwrap()
    }

    #[test]
    fn nested_name_without_modifier() {
        let n = name("Admin/UserController");
        let planned = plan(&n, None, &CONTROLLERS, Some("Acme\\App\\"));

        assert_eq!(
            planned.path.relative(),
            PathBuf::from("app/Http/Controllers/Admin/UserController.php")
        );
        assert_eq!(planned.namespace, "Acme\\App\\Http\\Controllers\\Admin");
        assert_eq!(planned.class_name, "UserController");
    }

    #[test]
    fn modifier_follows_sub_namespaces() {
        let planned = plan(
            &name("Admin/Users/ListController"),
            Some(TypeModifier::Api),
            &CONTROLLERS,
            Some("Acme\\App\\"),
        );

        assert_eq!(
            planned.path.segments(),
            ["app", "Http", "Controllers", "Admin", "Users", "Api", "ListController.php"]
        );
        assert_eq!(planned.namespace, "Acme\\App\\Http\\Controllers\\Admin\\Users\\Api");
    }

    #[test]
    fn flat_name_has_no_doubled_separator() {
        let n = name("UserController");
        let planned = plan(&n, Some(TypeModifier::Api), &CONTROLLERS, Some("A\\"));
        assert_eq!(
            planned.path.relative(),
            PathBuf::from("app/Http/Controllers/Api/UserController.php")
        );
        assert_eq!(planned.namespace, "A\\Http\\Controllers\\Api");

        let planned = plan(&n, None, &CONTROLLERS, Some("A\\"));
        assert_eq!(planned.namespace, "A\\Http\\Controllers");
    }

    #[test]
    fn missing_root_starts_at_suffix() {
        let planned = plan(&name("Home"), None, &CONTROLLERS, None);
        assert_eq!(planned.namespace, "Http\\Controllers");

        let planned = plan(&name("Home"), None, &CONTROLLERS, Some(""));
        assert_eq!(planned.namespace, "Http\\Controllers");
    }

    #[test]
    fn segment_count_is_base_plus_name() {
        for input in ["A", "A/B", "A/B/C", "Deep/er/Still/Class"] {
            let n = name(input);
            let planned = plan(&n, None, &CONTROLLERS, Some("R\\"));
            assert_eq!(planned.path.segments().len(), CONTROLLERS.base_dir.len() + n.len());

            let expected: Vec<&str> = ["R", "Http", "Controllers"]
                .into_iter()
                .chain(n.sub_namespace().iter().map(String::as_str))
                .collect();
            assert_eq!(planned.namespace, expected.join("\\"));
        }
    }

    #[test]
    fn parse_accepts_both_separators_and_trims() {
        let n = name("  Admin\\Reports/Export  ");
        assert_eq!(n.sub_namespace(), ["Admin", "Reports"]);
        assert_eq!(n.class_name(), "Export");
        assert_eq!(n.to_string(), "Admin/Reports/Export");
    }

    #[test]
    fn parse_rejects_bad_names() {
        let inputs = ["", "   ", "Admin//User", "Admin/", "/User", "../User", "User.php", "9Lives"];
        for input in inputs {
            let err = LogicalName::parse(input).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidName { .. }), "accepted {input:?}");
        }
    }

    #[test]
    fn planning_is_deterministic() {
        let n = name("Auth/Session");
        let a = plan(&n, None, &CONTROLLERS, Some("X\\"));
        let b = plan(&n, None, &CONTROLLERS, Some("X\\"));
        assert_eq!(a, b);
    }
}
