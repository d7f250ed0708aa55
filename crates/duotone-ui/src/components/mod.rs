//! Yew components.
pub(crate) mod theme_toggle;
