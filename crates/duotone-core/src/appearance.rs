//! Visible projection of a theme: body flag plus toggle icon.

use crate::config::ThemeConfig;
use crate::theme::ThemePreference;

/// What a [`crate::ThemeSurface`] has to paint for one theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeAppearance {
    /// Theme this appearance represents.
    pub theme: ThemePreference,
    /// Whether the dark flag is present on the document root.
    pub dark_flag: bool,
    /// Icon image source.
    pub icon_src: String,
    /// Icon accessible label.
    pub icon_label: String,
}

/// Build the appearance for `theme`.
///
/// The icon always advertises the opposite action: dark shows the
/// "switch to light" icon, light shows the "switch to dark" one.
#[must_use]
pub fn appearance_for(theme: ThemePreference, config: &ThemeConfig) -> ThemeAppearance {
    let icon = config.icon_for(theme);
    ThemeAppearance {
        theme,
        dark_flag: theme.is_dark(),
        icon_src: icon.src.clone(),
        icon_label: icon.label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_shows_sun_and_light_label() {
        let appearance = appearance_for(ThemePreference::Dark, &ThemeConfig::default());
        assert!(appearance.dark_flag);
        assert_eq!(appearance.icon_src, "img/sun.svg");
        assert_eq!(appearance.icon_label, "Mudar para tema claro");
    }

    #[test]
    fn light_shows_moon_and_dark_label() {
        let appearance = appearance_for(ThemePreference::Light, &ThemeConfig::default());
        assert!(!appearance.dark_flag);
        assert_eq!(appearance.icon_src, "img/moon.svg");
        assert_eq!(appearance.icon_label, "Mudar para tema escuro");
    }

    #[test]
    fn custom_icons_flow_through() {
        let mut config = ThemeConfig::default();
        config.dark_icon.src = "/static/light-mode.svg".to_string();
        let appearance = appearance_for(ThemePreference::Dark, &config);
        assert_eq!(appearance.icon_src, "/static/light-mode.svg");
    }
}
