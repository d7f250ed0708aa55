#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! DOM-free theme rules for the Duotone page toggle.
//!
//! Everything that decides *which* theme a page shows lives here so it can be
//! exercised natively; the wasm shell in `duotone-ui` only wires these rules to
//! the browser.

pub mod appearance;
pub mod config;
pub mod controller;
pub mod error;
pub mod ports;
pub mod resolve;
pub mod theme;

pub use appearance::{ThemeAppearance, appearance_for};
pub use config::{IconAsset, ThemeConfig};
pub use controller::{ThemeController, ToggleOutcome};
pub use error::{ConfigError, StorageError, ThemeError};
pub use ports::{ColorSchemeProbe, PreferenceStore, ThemeSurface};
pub use resolve::{Resolution, ThemeSource, resolve_theme};
pub use theme::ThemePreference;
