//! Controller type modifiers.

use std::fmt;

/// Category inserted between a controller's sub-namespaces and its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeModifier {
    /// REST API controllers.
    Api,
    /// Admin-post / AJAX action controllers.
    Action,
    /// Shortcode controllers.
    Shortcode,
    /// Admin side-menu page controllers.
    SideMenu,
}

impl TypeModifier {
    /// Every recognized modifier.
    pub const ALL: &'static [Self] = &[Self::Api, Self::Action, Self::Shortcode, Self::SideMenu];

    /// Looks up a modifier by its command-line spelling.
    ///
    /// Input is trimmed. Returns `None` for empty or unrecognized values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "api" => Some(Self::Api),
            "action" => Some(Self::Action),
            "shortcode" => Some(Self::Shortcode),
            "sideMenu" | "side-menu" => Some(Self::SideMenu),
            _ => None,
        }
    }

    /// The canonical command-line spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Action => "action",
            Self::Shortcode => "shortcode",
            Self::SideMenu => "sideMenu",
        }
    }

    /// Directory and namespace segment for this modifier.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Api => "Api",
            Self::Action => "Actions",
            Self::Shortcode => "Shortcodes",
            Self::SideMenu => "SideMenu",
        }
    }
}

impl fmt::Display for TypeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
