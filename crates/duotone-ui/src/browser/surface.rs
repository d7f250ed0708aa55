//! DOM surfaces: the body class flag plus wherever the icon lives.

use duotone_core::{ThemeAppearance, ThemeSurface};
use gloo::console;
use web_sys::{HtmlElement, HtmlImageElement};
use yew::Callback;

use super::describe_js;

/// Static-markup surface: body class plus an existing `<img>`.
pub(crate) struct DomSurface {
    body: HtmlElement,
    icon: HtmlImageElement,
    dark_class: String,
}

impl DomSurface {
    pub(crate) const fn new(body: HtmlElement, icon: HtmlImageElement, dark_class: String) -> Self {
        Self {
            body,
            icon,
            dark_class,
        }
    }
}

impl ThemeSurface for DomSurface {
    fn is_dark(&self) -> bool {
        self.body.class_list().contains(&self.dark_class)
    }

    fn render(&mut self, appearance: &ThemeAppearance) {
        set_body_flag(&self.body, &self.dark_class, appearance.dark_flag);
        self.icon.set_src(&appearance.icon_src);
        self.icon.set_alt(&appearance.icon_label);
    }
}

/// Yew-managed surface: the body class is set here, the icon is re-rendered by
/// the component through `on_render`.
pub(crate) struct BodySurface {
    body: Option<HtmlElement>,
    dark_class: String,
    dark: bool,
    on_render: Callback<ThemeAppearance>,
}

impl BodySurface {
    pub(crate) fn new(dark_class: String, on_render: Callback<ThemeAppearance>) -> Self {
        Self {
            body: gloo::utils::document().body(),
            dark_class,
            dark: false,
            on_render,
        }
    }
}

impl ThemeSurface for BodySurface {
    fn is_dark(&self) -> bool {
        self.body
            .as_ref()
            .map_or(self.dark, |body| body.class_list().contains(&self.dark_class))
    }

    fn render(&mut self, appearance: &ThemeAppearance) {
        if let Some(body) = &self.body {
            set_body_flag(body, &self.dark_class, appearance.dark_flag);
        }
        self.dark = appearance.dark_flag;
        self.on_render.emit(appearance.clone());
    }
}

fn set_body_flag(body: &HtmlElement, class: &str, present: bool) {
    if let Err(err) = body.class_list().toggle_with_force(class, present) {
        console::error!("failed to update theme class", class, describe_js(&err));
    }
}
