//! Theme controller: page-load bootstrap, toggle handling, and persistence.
//!
//! # Design
//! - The controller owns its capabilities; hosts reach them via accessors.
//! - Storage is only written on an explicit toggle, never on load.
//! - Storage read failures behave as "nothing stored"; write failures still flip
//!   the visible theme and are reported in [`ToggleOutcome`].

use tracing::{debug, error, warn};

use crate::appearance::appearance_for;
use crate::config::ThemeConfig;
use crate::error::StorageError;
use crate::ports::{ColorSchemeProbe, PreferenceStore, ThemeSurface};
use crate::resolve::{Resolution, resolve_theme};
use crate::theme::ThemePreference;

/// Result of handling one toggle click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Theme now applied to the surface.
    pub theme: ThemePreference,
    /// Whether persisting the new theme succeeded.
    pub persisted: Result<(), StorageError>,
}

/// Drives a [`ThemeSurface`] from stored, system, and user-chosen preferences.
#[derive(Debug)]
pub struct ThemeController<S, P, D> {
    config: ThemeConfig,
    store: S,
    probe: P,
    surface: D,
}

impl<S, P, D> ThemeController<S, P, D> {
    /// Assemble a controller from its configuration and capabilities.
    #[must_use]
    pub const fn new(config: ThemeConfig, store: S, probe: P, surface: D) -> Self {
        Self {
            config,
            store,
            probe,
            surface,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Color-scheme probe.
    #[must_use]
    pub const fn probe(&self) -> &P {
        &self.probe
    }

    /// Painted surface.
    #[must_use]
    pub const fn surface(&self) -> &D {
        &self.surface
    }
}

impl<S, P, D> ThemeController<S, P, D>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    D: ThemeSurface,
{
    /// Paint `theme` onto the surface: dark flag plus opposite-action icon.
    pub fn apply_theme(&mut self, theme: ThemePreference) {
        let appearance = appearance_for(theme, &self.config);
        debug!(theme = %theme, icon = %appearance.icon_src, "applying theme");
        self.surface.render(&appearance);
    }

    /// Paint an arbitrary theme identifier; anything but `"dark"` is light.
    pub fn apply_raw(&mut self, value: &str) {
        self.apply_theme(ThemePreference::from_stored(value));
    }

    /// Theme currently shown, read back from the surface flag.
    #[must_use]
    pub fn current(&self) -> ThemePreference {
        ThemePreference::from_dark_flag(self.surface.is_dark())
    }

    /// Resolve and apply the initial theme. Does not write storage.
    pub fn on_load(&mut self) -> Resolution {
        let stored = self.stored_preference();
        let system = self.probe.prefers_dark();
        let resolution = resolve_theme(stored.as_deref(), system);
        debug!(
            theme = %resolution.theme,
            source = resolution.source.as_str(),
            system_prefers_dark = ?system,
            "resolved initial theme"
        );
        self.apply_theme(resolution.theme);
        resolution
    }

    /// Flip the visible theme and persist the new choice.
    pub fn on_toggle_click(&mut self) -> ToggleOutcome {
        let next = self.current().inverse();
        self.apply_theme(next);
        let persisted = self.store.save(&self.config.storage_key, next.as_str());
        if let Err(err) = &persisted {
            error!(error = %err, theme = %next, "failed to persist theme preference");
        }
        ToggleOutcome {
            theme: next,
            persisted,
        }
    }

    /// React to a host color-scheme change.
    ///
    /// Only acts when `follow_system_changes` is enabled and no preference is
    /// stored; returns the theme applied, if any.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<ThemePreference> {
        if !self.config.follow_system_changes {
            return None;
        }
        if self.stored_preference().is_some_and(|value| !value.is_empty()) {
            debug!("ignoring system scheme change; preference is stored");
            return None;
        }
        let theme = ThemePreference::from_dark_flag(prefers_dark);
        self.apply_theme(theme);
        Some(theme)
    }

    fn stored_preference(&self) -> Option<String> {
        match self.store.load(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "theme preference unreadable; treating as absent");
                None
            }
        }
    }
}
