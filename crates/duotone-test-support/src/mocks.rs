//! In-memory fakes for the controller's storage, color-scheme, and surface capabilities.

use std::collections::HashMap;

use duotone_core::{ColorSchemeProbe, PreferenceStore, StorageError, ThemeAppearance, ThemeSurface};

/// Map-backed [`PreferenceStore`] with switchable failure injection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent read fail.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every subsequent write fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current value under `key`, bypassing failure injection.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                detail: "SecurityError: storage disabled".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                detail: "QuotaExceededError".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// [`ColorSchemeProbe`] returning a fixed answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedScheme(pub Option<bool>);

impl FixedScheme {
    /// Host prefers dark.
    pub const DARK: Self = Self(Some(true));
    /// Host prefers light.
    pub const LIGHT: Self = Self(Some(false));
    /// Signal unavailable.
    pub const UNAVAILABLE: Self = Self(None);
}

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// [`ThemeSurface`] that keeps the painted state and a render history.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    dark: bool,
    icon_src: Option<String>,
    icon_label: Option<String>,
    renders: Vec<ThemeAppearance>,
}

impl RecordingSurface {
    /// Fresh surface with no flag and no icon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current icon source, if one was painted.
    #[must_use]
    pub fn icon_src(&self) -> Option<&str> {
        self.icon_src.as_deref()
    }

    /// Current icon label, if one was painted.
    #[must_use]
    pub fn icon_label(&self) -> Option<&str> {
        self.icon_label.as_deref()
    }

    /// Every appearance rendered so far, oldest first.
    #[must_use]
    pub fn renders(&self) -> &[ThemeAppearance] {
        &self.renders
    }
}

impl ThemeSurface for RecordingSurface {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn render(&mut self, appearance: &ThemeAppearance) {
        self.dark = appearance.dark_flag;
        self.icon_src = Some(appearance.icon_src.clone());
        self.icon_label = Some(appearance.icon_label.clone());
        self.renders.push(appearance.clone());
    }
}
