//! Page-level constants, config block handling, and mount arbitration shared by
//! both mount paths.
//!
//! # Design
//! - A page gets exactly one controller. Whichever path binds first records
//!   itself in [`MOUNT_ATTRIBUTE`] on the root element; the other path backs off.
//! - Static binding without toggle markup is not an error: the page may mount
//!   the Yew component later.

use duotone_core::{ConfigError, ThemeConfig};

/// Media query answering whether the host prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Root-element attribute naming the mount path that owns the toggle.
pub const MOUNT_ATTRIBUTE: &str = "data-duotone-mount";

/// How the toggle got onto the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountMode {
    /// Existing page markup bound by `run_app`.
    Static,
    /// Yew component rendered by `mountThemeToggle`.
    Component,
}

impl MountMode {
    /// Value stored in [`MOUNT_ATTRIBUTE`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Component => "component",
        }
    }

    /// Parse a [`MOUNT_ATTRIBUTE`] value; unknown values are `None`.
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "static" => Some(Self::Static),
            "component" => Some(Self::Component),
            _ => None,
        }
    }
}

/// What static binding should do on a given page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaticBinding {
    /// Bind the controller to the page markup.
    Bind,
    /// Another path already owns the toggle.
    Claimed(MountMode),
    /// The page carries no toggle button; nothing to bind.
    NoMarkup,
}

/// Decide static binding from the root marker and the button lookup.
#[must_use]
pub fn static_binding(claimed: Option<&str>, toggle_present: bool) -> StaticBinding {
    if let Some(owner) = claimed.and_then(MountMode::from_attribute) {
        return StaticBinding::Claimed(owner);
    }
    if toggle_present {
        StaticBinding::Bind
    } else {
        StaticBinding::NoMarkup
    }
}

/// Decide whether the Yew component may mount.
///
/// # Errors
///
/// Returns the mount path that already owns the toggle.
pub fn component_mount(claimed: Option<&str>) -> Result<(), MountMode> {
    match claimed.and_then(MountMode::from_attribute) {
        Some(owner) => Err(owner),
        None => Ok(()),
    }
}

/// Build the toggle configuration from the page's optional JSON block.
///
/// A missing or blank block yields the default configuration.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the block is present but malformed or fails
/// validation.
pub fn page_config(block: Option<&str>) -> Result<ThemeConfig, ConfigError> {
    match block.map(str::trim).filter(|text| !text.is_empty()) {
        Some(document) => ThemeConfig::from_json(document),
        None => Ok(ThemeConfig::default()),
    }
}
