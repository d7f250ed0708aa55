//! Light or dark theme preference and its string forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemePreference {
    /// String identifier written to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map a dark-mode flag onto a preference.
    #[must_use]
    pub const fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Lenient parse for values read back from storage.
    ///
    /// Only the exact string `"dark"` selects the dark theme; everything else,
    /// including casing variants and garbage, lands on light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == Self::Dark.as_str() {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_to_str() {
        assert_eq!(ThemePreference::Light.as_str(), "light");
        assert_eq!(ThemePreference::Dark.as_str(), "dark");
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn inverse_flips_both_ways() {
        assert_eq!(ThemePreference::Light.inverse(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.inverse(), ThemePreference::Light);
    }

    #[test]
    fn stored_values_other_than_dark_fall_back_to_light() {
        assert_eq!(ThemePreference::from_stored("dark"), ThemePreference::Dark);
        for value in ["light", "", "Dark", "DARK", " dark", "sepia", "null"] {
            assert_eq!(
                ThemePreference::from_stored(value),
                ThemePreference::Light,
                "value {value:?}"
            );
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(
            "light".parse::<ThemePreference>(),
            Ok(ThemePreference::Light)
        );
        assert_eq!(
            "sepia".parse::<ThemePreference>(),
            Err(ThemeError::UnknownTheme {
                value: "sepia".to_string()
            })
        );
    }

    #[test]
    fn serde_uses_lowercase_identifiers() {
        let encoded = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(encoded, "\"dark\"");
        let decoded: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(decoded, ThemePreference::Light);
    }

    #[test]
    fn dark_flag_round_trips() {
        assert_eq!(
            ThemePreference::from_dark_flag(true),
            ThemePreference::Dark
        );
        assert!(!ThemePreference::from_dark_flag(false).is_dark());
    }
}
