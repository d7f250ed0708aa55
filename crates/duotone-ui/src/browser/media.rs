//! `prefers-color-scheme` probe.

use duotone_core::ColorSchemeProbe;
use gloo::events::EventListener;
use gloo::utils::window;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::page::DARK_SCHEME_QUERY;

pub(crate) struct MediaQueryProbe {
    query: Option<MediaQueryList>,
}

impl MediaQueryProbe {
    pub(crate) fn new() -> Self {
        let query = window().match_media(DARK_SCHEME_QUERY).ok().flatten();
        Self { query }
    }

    /// Listen for scheme changes; `None` when the query is unsupported.
    pub(crate) fn watch<F>(&self, mut on_change: F) -> Option<EventListener>
    where
        F: FnMut(bool) + 'static,
    {
        let query = self.query.as_ref()?;
        Some(EventListener::new(query, "change", move |event| {
            if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                on_change(event.matches());
            }
        }))
    }
}

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }
}
