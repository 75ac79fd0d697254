//! Per-kind descriptors for the generated artifacts.

use std::fmt;

use crate::planner::{Layout, TypeModifier};

/// The artifacts the generator knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// HTTP controller extending the bootstrap `Controller`.
    Controller,
    /// Request middleware implementing `MiddlewareInterface`.
    Middleware,
    /// Service provider implementing `ServiceProviderInterface`.
    Provider,
}

/// Everything that differs between artifact kinds.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Human-readable noun used in messages.
    pub noun: &'static str,
    /// Directory and namespace placement.
    pub layout: Layout,
    /// Type modifiers this kind accepts; empty means none.
    pub modifiers: &'static [TypeModifier],
    /// Whether the rendered class imports from the bootstrap root.
    pub imports_bootstrap: bool,
}

const CONTROLLER: Descriptor = Descriptor {
    noun: "controller",
    layout: Layout {
        base_dir: &["app", "Http", "Controllers"],
        namespace_suffix: &["Http", "Controllers"],
        extension: "php",
    },
    modifiers: TypeModifier::ALL,
    imports_bootstrap: true,
};

const MIDDLEWARE: Descriptor = Descriptor {
    noun: "middleware",
    layout: Layout {
        base_dir: &["app", "Http", "Middleware"],
        namespace_suffix: &["Http", "Middleware"],
        extension: "php",
    },
    modifiers: &[],
    imports_bootstrap: false,
};

const PROVIDER: Descriptor = Descriptor {
    noun: "provider",
    layout: Layout {
        base_dir: &["app", "Providers"],
        namespace_suffix: &["Providers"],
        extension: "php",
    },
    modifiers: &[],
    imports_bootstrap: false,
};

impl ArtifactKind {
    /// Every kind, in command order.
    pub const ALL: &'static [Self] = &[Self::Controller, Self::Middleware, Self::Provider];

    /// Static description of this kind.
    #[must_use]
    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::Controller => &CONTROLLER,
            Self::Middleware => &MIDDLEWARE,
            Self::Provider => &PROVIDER,
        }
    }

    /// Name of the template used to render this kind.
    #[must_use]
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Controller => "controller.php",
            Self::Middleware => "middleware.php",
            Self::Provider => "provider.php",
        }
    }

    /// Resolves a raw `--type` value against the modifiers this kind accepts.
    ///
    /// Empty input, unknown values, and modifiers this kind does not accept
    /// all resolve to `None`; the latter two are logged.
    #[must_use]
    pub fn modifier(self, raw: Option<&str>) -> Option<TypeModifier> {
        let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
        let descriptor = self.descriptor();

        if descriptor.modifiers.is_empty() {
            tracing::warn!(kind = %self, value = raw, "{} does not take a type; ignoring", self);
            return None;
        }

        match TypeModifier::parse(raw).filter(|m| descriptor.modifiers.contains(m)) {
            Some(modifier) => Some(modifier),
            None => {
                let accepted: Vec<&str> =
                    descriptor.modifiers.iter().map(|m| m.as_str()).collect();
                tracing::warn!(
                    kind = %self,
                    value = raw,
                    accepted = %accepted.join(", "),
                    "unrecognized type; generating without one"
                );
                None
            }
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_controllers_take_modifiers() {
        assert_eq!(ArtifactKind::Controller.modifier(Some("api")), Some(TypeModifier::Api));
        assert_eq!(ArtifactKind::Middleware.modifier(Some("api")), None);
        assert_eq!(ArtifactKind::Provider.modifier(Some("api")), None);
    }

    #[test]
    fn unknown_or_blank_modifier_is_none() {
        assert_eq!(ArtifactKind::Controller.modifier(Some("widget")), None);
        assert_eq!(ArtifactKind::Controller.modifier(Some("  ")), None);
        assert_eq!(ArtifactKind::Controller.modifier(None), None);
    }

    #[test]
    fn trims_modifier_input() {
        assert_eq!(
            ArtifactKind::Controller.modifier(Some(" sideMenu ")),
            Some(TypeModifier::SideMenu)
        );
    }

    #[test]
    fn layouts_live_under_app() {
        for kind in ArtifactKind::ALL {
            let descriptor = kind.descriptor();
            assert_eq!(descriptor.layout.base_dir[0], "app");
            assert_eq!(descriptor.layout.base_dir[1..], *descriptor.layout.namespace_suffix);
        }
    }

    #[test]
    fn only_controllers_import_from_bootstrap() {
        assert!(ArtifactKind::Controller.descriptor().imports_bootstrap);
        assert!(!ArtifactKind::Middleware.descriptor().imports_bootstrap);
        assert!(!ArtifactKind::Provider.descriptor().imports_bootstrap);
    }
}
