//! The generation pipeline shared by every artifact kind.
//!
//! ```text
//! manifest ─► root namespaces ─┐
//! name, --type ─► plan ────────┼─► render ─► materialize
//!                 kind ────────┘
//! ```

pub mod kind;

use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::error::Result;
use crate::manifest::{self, RootNamespaces};
use crate::materialize::materialize;
use crate::planner::{self, LogicalName, TypeModifier};
use crate::template::{self, TemplateVars};

pub use kind::{ArtifactKind, Descriptor};

/// A successfully generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// What was generated.
    pub kind: ArtifactKind,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    /// Absolute path of the written file.
    pub file: PathBuf,
    /// Namespace declared in the file.
    pub namespace: String,
    /// Class declared in the file.
    pub class_name: String,
    /// Modifier applied, if any.
    pub modifier: Option<TypeModifier>,
    /// Directories created along the way.
    pub created_dirs: Vec<PathBuf>,
}

/// Generates artifacts for one project.
///
/// The manifest is read once, when the generator is created.
pub struct Generator<'a> {
    ctx: &'a ServiceContext,
    namespaces: RootNamespaces,
}

impl<'a> Generator<'a> {
    /// Resolves the project's root namespaces.
    ///
    /// # Errors
    ///
    /// Returns a manifest error if `composer.json` under the context root
    /// cannot be read or parsed.
    pub fn new(ctx: &'a ServiceContext) -> Result<Self> {
        let namespaces = manifest::resolve(ctx.fs.as_ref(), &ctx.root)?;
        Ok(Self { ctx, namespaces })
    }

    /// Builds a generator from already-resolved namespaces.
    #[must_use]
    pub fn with_namespaces(ctx: &'a ServiceContext, namespaces: RootNamespaces) -> Self {
        Self { ctx, namespaces }
    }

    /// Generates one artifact of `kind` named `name`.
    ///
    /// `modifier` is the raw `--type` value. It is ignored for kinds that
    /// take no modifier and for unrecognized values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ScaffoldError::InvalidName`] for unusable
    /// names, a collision if the artifact or a blocking file already exists,
    /// or an I/O error if the filesystem refuses a creation.
    pub fn generate(
        &self,
        kind: ArtifactKind,
        name: &str,
        modifier: Option<&str>,
    ) -> Result<Generated> {
        let descriptor = kind.descriptor();
        let name = LogicalName::parse(name)?;
        let modifier = kind.modifier(modifier);

        let root = self.namespaces.app.as_deref();
        if root.is_none() {
            let marker = manifest::APP_MARKER;
            tracing::warn!(%kind, marker, "manifest maps no namespace to this root");
        }
        if descriptor.imports_bootstrap && self.namespaces.bootstrap.is_none() {
            let marker = manifest::BOOTSTRAP_MARKER;
            tracing::warn!(
                %kind,
                marker,
                "manifest maps no namespace to this root; base class import is unqualified"
            );
        }

        let plan = planner::plan(&name, modifier, &descriptor.layout, root);
        let contents = template::render(
            kind,
            &TemplateVars {
                namespace: &plan.namespace,
                bootstrap_namespace: self.namespaces.bootstrap.as_deref(),
                class_name: &plan.class_name,
            },
        )?;

        let written = materialize(self.ctx.fs.as_ref(), &self.ctx.root, &plan.path, &contents)?;

        Ok(Generated {
            kind,
            relative_path: plan.path.relative(),
            file: written.file,
            namespace: plan.namespace,
            class_name: plan.class_name,
            modifier,
            created_dirs: written.created_dirs,
        })
    }
}
