//! Browser-backed implementations of the core capability traits.

mod media;
mod storage;
mod surface;

pub(crate) use media::MediaQueryProbe;
pub(crate) use storage::BrowserStore;
pub(crate) use surface::{BodySurface, DomSurface};

use wasm_bindgen::JsValue;

/// Human-readable form of a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
