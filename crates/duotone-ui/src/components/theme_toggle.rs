use std::cell::RefCell;
use std::rc::Rc;

use duotone_core::{ThemeConfig, ThemeController, ThemePreference, appearance_for};
use yew::prelude::*;

use crate::app::report_toggle;
use crate::browser::{BodySurface, BrowserStore, MediaQueryProbe};

type ToggleController = ThemeController<BrowserStore, MediaQueryProbe, BodySurface>;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    #[prop_or_default]
    pub(crate) config: ThemeConfig,
    #[prop_or_default]
    pub(crate) class: Classes,
}

/// Light/dark toggle button that renders its own icon.
#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let appearance = {
        let config = props.config.clone();
        use_state(move || appearance_for(ThemePreference::default(), &config))
    };
    let controller: Rc<RefCell<Option<ToggleController>>> = use_mut_ref(|| None);

    {
        let controller = controller.clone();
        let appearance = appearance.clone();
        use_effect_with_deps(
            move |config: &ThemeConfig| {
                let surface = BodySurface::new(
                    config.dark_class.clone(),
                    Callback::from(move |next| appearance.set(next)),
                );
                let mut ctl = ThemeController::new(
                    config.clone(),
                    BrowserStore::open(),
                    MediaQueryProbe::new(),
                    surface,
                );
                ctl.on_load();
                let listener = if config.follow_system_changes {
                    ctl.probe().watch({
                        let controller = controller.clone();
                        move |prefers_dark| {
                            if let Some(ctl) = controller.borrow_mut().as_mut() {
                                ctl.on_system_change(prefers_dark);
                            }
                        }
                    })
                } else {
                    None
                };
                *controller.borrow_mut() = Some(ctl);
                move || {
                    drop(listener);
                    controller.borrow_mut().take();
                }
            },
            props.config.clone(),
        );
    }

    let onclick = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ctl) = controller.borrow_mut().as_mut() {
                report_toggle(ctl.on_toggle_click());
            }
        })
    };

    let config = &props.config;
    html! {
        <button
            id={config.toggle_id.clone()}
            type="button"
            class={props.class.clone()}
            {onclick}
        >
            <img
                id={config.icon_id.clone()}
                src={appearance.icon_src.clone()}
                alt={appearance.icon_label.clone()}
            />
        </button>
    }
}
