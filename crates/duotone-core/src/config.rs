//! Page-level configuration for the theme toggle.
//!
//! # Design
//! - Every field has a default matching the stock page markup, so an absent
//!   config block behaves exactly like the plain page.
//! - Unknown fields are rejected to surface typos early.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::ThemePreference;

/// Default storage key for the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Default class toggled on the document body while dark mode is active.
pub const DEFAULT_DARK_CLASS: &str = "dark-theme";
/// Default id of the toggle button.
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
/// Default id of the toggle icon image.
pub const DEFAULT_ICON_ID: &str = "theme-toggle-icon";
/// Id of the optional JSON config block embedded in the page.
pub const CONFIG_ELEMENT_ID: &str = "duotone-config";

/// Icon shown on the toggle button together with its accessible label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconAsset {
    /// Image source, relative to the page.
    pub src: String,
    /// Accessible label (`alt`) describing the action the button performs.
    pub label: String,
}

impl IconAsset {
    fn new(src: &str, label: &str) -> Self {
        Self {
            src: src.to_string(),
            label: label.to_string(),
        }
    }
}

/// Theme toggle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Storage key holding the persisted preference.
    pub storage_key: String,
    /// Body class present exactly while the dark theme is applied.
    pub dark_class: String,
    /// Id of the toggle button element.
    pub toggle_id: String,
    /// Id of the toggle icon image element.
    pub icon_id: String,
    /// Icon displayed while dark mode is active (offers switching to light).
    pub dark_icon: IconAsset,
    /// Icon displayed while light mode is active (offers switching to dark).
    pub light_icon: IconAsset,
    /// Re-apply the system preference when it changes and nothing is stored.
    pub follow_system_changes: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            icon_id: DEFAULT_ICON_ID.to_string(),
            dark_icon: IconAsset::new("img/sun.svg", "Mudar para tema claro"),
            light_icon: IconAsset::new("img/moon.svg", "Mudar para tema escuro"),
            follow_system_changes: false,
        }
    }
}

impl ThemeConfig {
    /// Decode and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON for
    /// this shape and [`ConfigError::InvalidField`] when a value fails
    /// validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field can be used against the DOM and storage.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_blank("storage_key", &self.storage_key)?;
        require_non_blank("dark_class", &self.dark_class)?;
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidField {
                field: "dark_class",
                reason: "must not contain whitespace",
            });
        }
        require_non_blank("toggle_id", &self.toggle_id)?;
        require_non_blank("icon_id", &self.icon_id)?;
        require_non_blank("dark_icon.src", &self.dark_icon.src)?;
        require_non_blank("light_icon.src", &self.light_icon.src)?;
        Ok(())
    }

    /// Icon advertised while `theme` is applied.
    #[must_use]
    pub const fn icon_for(&self, theme: ThemePreference) -> &IconAsset {
        match theme {
            ThemePreference::Dark => &self.dark_icon,
            ThemePreference::Light => &self.light_icon,
        }
    }
}

fn require_non_blank(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            reason: "must not be empty",
        });
    }
    Ok(())
}
