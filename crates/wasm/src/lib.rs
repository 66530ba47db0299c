//! Browser entry point: applies the vitrine core to the live page.

mod agenda;
mod contact;
mod dom;
mod nav;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::PageConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::scroll::ScrollEffects;

const CONFIG_ELEMENT_ID: &str = "vitrine-config";

thread_local! {
    static EFFECTS: RefCell<Option<Rc<RefCell<ScrollEffects>>>> = const { RefCell::new(None) };
}

/// Read the optional JSON configuration block, falling back to defaults.
fn load_config(document: &Document) -> PageConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            dom::warn(&format!("ignoring configuration: {e}"));
            PageConfig::default()
        }
    }
}

/// Log a failed setup step; the other features still install.
fn report(feature: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        dom::error(&format!("{feature} setup failed: {e:?}"));
    }
}

fn run(window: &Window, document: &Document) {
    let config = load_config(document);

    report("agenda", agenda::run(window, document, &config));
    report(
        "nav",
        nav::install(window, document, &config.selectors, &config.nav),
    );
    report(
        "contact",
        contact::install(window, document, &config.selectors.contact_form, &config.contact),
    );

    let effects = Rc::new(RefCell::new(ScrollEffects::discover(
        window.clone(),
        document,
        &config,
    )));
    report("scroll", scroll::install(window, &effects));
    EFFECTS.with(|slot| *slot.borrow_mut() = Some(effects));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let Some(window) = dom::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let w = window.clone();
        let d = document.clone();
        let mut pending = Some(());
        dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
            if pending.take().is_some() {
                run(&w, &d);
            }
        })?;
    } else {
        run(&window, &document);
    }
    Ok(())
}

/// Re-measure section geometry and repaint.
///
/// Call after layout changes the page knows about (fonts loaded, images
/// decoded). Resizes are handled automatically only when
/// `scroll.recompute_on_resize` is set.
#[wasm_bindgen]
pub fn recompute_layout() {
    EFFECTS.with(|slot| {
        if let Some(effects) = slot.borrow().as_ref() {
            effects.borrow_mut().measure();
            effects.borrow().tick();
        }
    });
}
