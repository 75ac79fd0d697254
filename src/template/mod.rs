//! Source templates for generated artifacts.

use std::sync::OnceLock;

use minijinja::{context, Environment};

use crate::error::{Result, ScaffoldError};
use crate::generator::ArtifactKind;
use crate::planner::NAMESPACE_SEPARATOR;

const CONTROLLER: &str = include_str!("../../templates/controller.php.j2");
const MIDDLEWARE: &str = include_str!("../../templates/middleware.php.j2");
const PROVIDER: &str = include_str!("../../templates/provider.php.j2");

/// Base class every generated controller extends, relative to the bootstrap root.
const CONTROLLER_BASE: &str = "System\\Controller";

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    /// Namespace declared by the generated file.
    pub namespace: &'a str,
    /// Bootstrap root used for the controller base-class import.
    pub bootstrap_namespace: Option<&'a str>,
    /// Declared class name.
    pub class_name: &'a str,
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        for kind in ArtifactKind::ALL {
            // A template that fails to compile surfaces later as a missing-template error.
            if let Err(e) = env.add_template(kind.template_name(), source(*kind)) {
                tracing::error!(template = kind.template_name(), error = %e, "invalid template");
            }
        }
        env
    })
}

fn source(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Controller => CONTROLLER,
        ArtifactKind::Middleware => MIDDLEWARE,
        ArtifactKind::Provider => PROVIDER,
    }
}

fn controller_import(bootstrap_namespace: Option<&str>) -> String {
    match bootstrap_namespace.map(|ns| ns.trim_matches(NAMESPACE_SEPARATOR)) {
        Some(root) if !root.is_empty() => format!("{root}{NAMESPACE_SEPARATOR}{CONTROLLER_BASE}"),
        _ => CONTROLLER_BASE.to_string(),
    }
}

/// Renders the source text for `kind`.
///
/// # Errors
///
/// Returns [`ScaffoldError::Render`] if the template cannot be rendered.
pub fn render(kind: ArtifactKind, vars: &TemplateVars<'_>) -> Result<String> {
    let template = kind.template_name();
    let render_error = |source| ScaffoldError::Render { template, source };

    let tmpl = environment().get_template(template).map_err(render_error)?;
    tmpl.render(context! {
        namespace => vars.namespace,
        class_name => vars.class_name,
        controller_import => controller_import(vars.bootstrap_namespace),
    })
    .map_err(render_error)
}
