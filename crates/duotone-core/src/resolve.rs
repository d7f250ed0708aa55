//! Page-load theme resolution.

use crate::theme::ThemePreference;

/// Where a resolved theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    /// A persisted user choice.
    Stored,
    /// The host's dark color-scheme signal.
    System,
    /// Nothing stored and no dark signal.
    Default,
}

impl ThemeSource {
    /// Identifier used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::System => "system",
            Self::Default => "default",
        }
    }
}

/// Outcome of [`resolve_theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Theme to apply.
    pub theme: ThemePreference,
    /// Which input decided it.
    pub source: ThemeSource,
}

/// Decide the initial theme. First match wins:
///
/// 1. a non-empty stored value, parsed leniently;
/// 2. a dark system preference;
/// 3. light.
///
/// An empty stored string counts as absent, and an unavailable system signal
/// (`None`) counts as not preferring dark.
#[must_use]
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Resolution {
    if let Some(value) = stored.filter(|value| !value.is_empty()) {
        return Resolution {
            theme: ThemePreference::from_stored(value),
            source: ThemeSource::Stored,
        };
    }
    if system_prefers_dark.unwrap_or(false) {
        return Resolution {
            theme: ThemePreference::Dark,
            source: ThemeSource::System,
        };
    }
    Resolution {
        theme: ThemePreference::Light,
        source: ThemeSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_dark_wins_over_any_system_signal() {
        for system in [Some(true), Some(false), None] {
            let resolved = resolve_theme(Some("dark"), system);
            assert_eq!(resolved.theme, ThemePreference::Dark);
            assert_eq!(resolved.source, ThemeSource::Stored);
        }
    }

    #[test]
    fn stored_light_overrides_dark_system() {
        let resolved = resolve_theme(Some("light"), Some(true));
        assert_eq!(resolved.theme, ThemePreference::Light);
        assert_eq!(resolved.source, ThemeSource::Stored);
    }

    #[test]
    fn unrecognised_stored_value_is_used_and_lands_on_light() {
        let resolved = resolve_theme(Some("solarized"), Some(true));
        assert_eq!(resolved.theme, ThemePreference::Light);
        assert_eq!(resolved.source, ThemeSource::Stored);
    }

    #[test]
    fn empty_stored_value_defers_to_system() {
        let resolved = resolve_theme(Some(""), Some(true));
        assert_eq!(resolved.theme, ThemePreference::Dark);
        assert_eq!(resolved.source, ThemeSource::System);
    }

    #[test]
    fn system_dark_applies_without_stored_value() {
        assert_eq!(
            resolve_theme(None, Some(true)),
            Resolution {
                theme: ThemePreference::Dark,
                source: ThemeSource::System,
            }
        );
    }

    #[test]
    fn light_or_unavailable_system_defaults_to_light() {
        for system in [Some(false), None] {
            assert_eq!(
                resolve_theme(None, system),
                Resolution {
                    theme: ThemePreference::Light,
                    source: ThemeSource::Default,
                }
            );
        }
    }
}
