//! Capabilities the controller needs from its host.
//!
//! The browser shell implements these over `localStorage`, `matchMedia`, and
//! the DOM; `duotone-test-support` provides in-memory doubles.

use crate::appearance::ThemeAppearance;
use crate::error::StorageError;

/// Key/value store that survives page reloads.
pub trait PreferenceStore {
    /// Read the raw value under `key`, `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read-only access to the host's color-scheme preference.
pub trait ColorSchemeProbe {
    /// `Some(true)` when the host prefers dark, `None` when the signal is
    /// unavailable.
    fn prefers_dark(&self) -> Option<bool>;
}

/// The DOM nodes a theme is painted onto.
pub trait ThemeSurface {
    /// Whether the dark flag is currently present.
    fn is_dark(&self) -> bool;

    /// Paint `appearance` (flag and icon) onto the surface.
    fn render(&mut self, appearance: &ThemeAppearance);
}
