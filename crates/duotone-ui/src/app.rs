//! Page bootstrap: wires the controller to static markup or mounts the Yew toggle.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use duotone_core::config::CONFIG_ELEMENT_ID;
use duotone_core::{ThemeConfig, ThemeController, ToggleOutcome};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, DocumentReadyState, Element, HtmlImageElement};

use crate::browser::{BrowserStore, DomSurface, MediaQueryProbe, describe_js};
use crate::components::theme_toggle::{ThemeToggle, ThemeToggleProps};
use crate::page::{
    MOUNT_ATTRIBUTE, MountMode, StaticBinding, component_mount, page_config, static_binding,
};

type PageController = ThemeController<BrowserStore, MediaQueryProbe, DomSurface>;

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    report(bind_page());
}

/// Render the Yew theme toggle into `host`, configured from the page block.
///
/// Refuses when the page's static markup is already bound, so one click never
/// reaches two controllers.
#[wasm_bindgen(js_name = mountThemeToggle)]
pub fn mount_toggle(host: Element) {
    let document = document();
    if let Err(owner) = component_mount(mount_claim(&document).as_deref()) {
        console::error!(
            "theme toggle already mounted; not rendering component",
            owner.as_str()
        );
        return;
    }
    claim_mount(&document, MountMode::Component);
    let props = ThemeToggleProps {
        config: read_page_config(&document),
        class: yew::Classes::new(),
    };
    yew::Renderer::<ThemeToggle>::with_root_and_props(host, props).render();
}

/// Bind the existing toggle markup once the document has been parsed.
fn bind_page() -> Result<()> {
    let document = document();
    if document.ready_state() == DocumentReadyState::Loading {
        EventListener::once(&document, "DOMContentLoaded", |_event| {
            report(bind_controls());
        })
        .forget();
        return Ok(());
    }
    bind_controls()
}

fn bind_controls() -> Result<()> {
    let document = document();
    let config = read_page_config(&document);
    let button = document.get_element_by_id(&config.toggle_id);
    let button = match static_binding(mount_claim(&document).as_deref(), button.is_some()) {
        StaticBinding::Bind => button.context("toggle button vanished during binding")?,
        StaticBinding::Claimed(owner) => {
            console::debug!("theme toggle owned elsewhere; skipping markup", owner.as_str());
            return Ok(());
        }
        StaticBinding::NoMarkup => {
            console::debug!("no theme toggle markup", config.toggle_id.clone());
            return Ok(());
        }
    };
    let body = document.body().context("document has no <body>")?;
    let icon = document
        .get_element_by_id(&config.icon_id)
        .with_context(|| format!("toggle icon #{} not found", config.icon_id))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| anyhow!("toggle icon #{} is not an <img>", config.icon_id))?;

    claim_mount(&document, MountMode::Static);
    let follow_system = config.follow_system_changes;
    let surface = DomSurface::new(body, icon, config.dark_class.clone());
    let controller: Rc<RefCell<PageController>> = Rc::new(RefCell::new(ThemeController::new(
        config,
        BrowserStore::open(),
        MediaQueryProbe::new(),
        surface,
    )));

    controller.borrow_mut().on_load();

    EventListener::new(&button, "click", {
        let controller = Rc::clone(&controller);
        move |_event| report_toggle(controller.borrow_mut().on_toggle_click())
    })
    .forget();

    if follow_system {
        let listener = controller.borrow().probe().watch({
            let controller = Rc::clone(&controller);
            move |prefers_dark| {
                controller.borrow_mut().on_system_change(prefers_dark);
            }
        });
        if let Some(listener) = listener {
            listener.forget();
        }
    }
    Ok(())
}

fn mount_claim(document: &Document) -> Option<String> {
    document
        .document_element()
        .and_then(|root| root.get_attribute(MOUNT_ATTRIBUTE))
}

fn claim_mount(document: &Document, mode: MountMode) {
    if let Some(root) = document.document_element() {
        if let Err(err) = root.set_attribute(MOUNT_ATTRIBUTE, mode.as_str()) {
            console::error!("failed to record theme toggle mount", describe_js(&err));
        }
    }
}

fn read_page_config(document: &Document) -> ThemeConfig {
    let block = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    page_config(block.as_deref()).unwrap_or_else(|err| {
        console::error!("ignoring theme config block", err.to_string());
        ThemeConfig::default()
    })
}

pub(crate) fn report_toggle(outcome: ToggleOutcome) {
    if let Err(err) = outcome.persisted {
        console::error!("theme preference not saved", err.to_string());
    }
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        console::error!("theme toggle unavailable", format!("{err:#}"));
    }
}
