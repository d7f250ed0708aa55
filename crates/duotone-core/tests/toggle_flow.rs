use duotone_core::{ThemeConfig, ThemeController, ThemePreference, ThemeSource, ThemeSurface};
use duotone_test_support::{FixedScheme, MemoryStore, RecordingSurface};

fn page(
    store: MemoryStore,
    scheme: FixedScheme,
) -> ThemeController<MemoryStore, FixedScheme, RecordingSurface> {
    ThemeController::new(
        ThemeConfig::default(),
        store,
        scheme,
        RecordingSurface::new(),
    )
}

#[test]
fn fresh_visit_with_dark_system_then_one_click() {
    let mut ctl = page(MemoryStore::new(), FixedScheme::DARK);

    let resolution = ctl.on_load();
    assert_eq!(resolution.theme, ThemePreference::Dark);
    assert_eq!(resolution.source, ThemeSource::System);
    assert!(ctl.surface().is_dark());
    assert_eq!(ctl.surface().icon_src(), Some("img/sun.svg"));
    assert_eq!(ctl.surface().icon_label(), Some("Mudar para tema claro"));
    assert_eq!(ctl.store().get("theme"), None);

    let outcome = ctl.on_toggle_click();
    assert_eq!(outcome.theme, ThemePreference::Light);
    assert!(outcome.persisted.is_ok());
    assert!(!ctl.surface().is_dark());
    assert_eq!(ctl.surface().icon_src(), Some("img/moon.svg"));
    assert_eq!(ctl.surface().icon_label(), Some("Mudar para tema escuro"));
    assert_eq!(ctl.store().get("theme"), Some("light"));
}

#[test]
fn double_toggle_restores_visible_state_and_stored_value() {
    for (stored, scheme) in [
        (None, FixedScheme::DARK),
        (None, FixedScheme::LIGHT),
        (Some("dark"), FixedScheme::UNAVAILABLE),
        (Some("light"), FixedScheme::DARK),
    ] {
        let store = stored.map_or_else(MemoryStore::new, |value| {
            MemoryStore::with_entry("theme", value)
        });
        let mut ctl = page(store, scheme);
        ctl.on_load();
        let initial_dark = ctl.surface().is_dark();
        let initial_icon = ctl.surface().icon_src().map(str::to_string);
        let initial_label = ctl.surface().icon_label().map(str::to_string);

        let first = ctl.on_toggle_click();
        assert_ne!(ctl.surface().is_dark(), initial_dark);
        assert_eq!(ctl.store().get("theme"), Some(first.theme.as_str()));

        let second = ctl.on_toggle_click();
        assert_eq!(second.theme, first.theme.inverse());
        assert_eq!(ctl.surface().is_dark(), initial_dark, "case {stored:?}/{scheme:?}");
        assert_eq!(ctl.surface().icon_src().map(str::to_string), initial_icon);
        assert_eq!(ctl.surface().icon_label().map(str::to_string), initial_label);
        let expected_stored = ThemePreference::from_dark_flag(initial_dark).as_str();
        assert_eq!(ctl.store().get("theme"), Some(expected_stored));
        if let Some(value) = stored {
            assert_eq!(ctl.store().get("theme"), Some(value));
        }
        assert_eq!(ctl.store().writes(), 2);
    }
}

#[test]
fn stored_value_always_matches_visible_state_after_toggle() {
    let mut ctl = page(MemoryStore::new(), FixedScheme::LIGHT);
    ctl.on_load();
    for _ in 0..5 {
        let outcome = ctl.on_toggle_click();
        let visible = ThemePreference::from_dark_flag(ctl.surface().is_dark());
        assert_eq!(visible, outcome.theme);
        assert_eq!(ctl.store().get("theme"), Some(visible.as_str()));
    }
    assert_eq!(ctl.store().writes(), 5);
}

#[test]
fn reload_restores_the_last_toggled_theme() {
    let mut first = page(MemoryStore::new(), FixedScheme::LIGHT);
    first.on_load();
    first.on_toggle_click();
    let persisted = first.store().clone();

    let mut second = page(persisted, FixedScheme::LIGHT);
    let resolution = second.on_load();
    assert_eq!(resolution.theme, ThemePreference::Dark);
    assert_eq!(resolution.source, ThemeSource::Stored);
}

#[test]
fn config_document_drives_the_controller() -> anyhow::Result<()> {
    let config = ThemeConfig::from_json(
        r#"{
            "storage_key": "docs.theme",
            "dark_icon": { "src": "/icons/sun.svg", "label": "Switch to light theme" }
        }"#,
    )?;
    let mut ctl = ThemeController::new(
        config,
        MemoryStore::new(),
        FixedScheme::DARK,
        RecordingSurface::new(),
    );
    ctl.on_load();
    assert_eq!(ctl.surface().icon_src(), Some("/icons/sun.svg"));
    assert_eq!(ctl.surface().icon_label(), Some("Switch to light theme"));

    ctl.on_toggle_click();
    assert_eq!(ctl.store().get("docs.theme"), Some("light"));
    Ok(())
}
