use std::cell::Cell;
use std::rc::Rc;

use vitrine_core::config::{NavConfig, Selectors};
use vitrine_core::nav::{MenuState, NavEvent};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, Window};

use crate::dom;

struct Menu {
    burger: Element,
    nav: Element,
    open_class: String,
    breakpoint: f64,
    state: Cell<MenuState>,
}

impl Menu {
    fn handle(&self, event: NavEvent) {
        let previous = self.state.get();
        let next = previous.on(event, self.breakpoint);
        if next == previous {
            return;
        }
        self.state.set(next);
        if let Err(e) = self
            .nav
            .class_list()
            .toggle_with_force(&self.open_class, next.is_open())
        {
            dom::warn(&format!("menu class update failed: {e:?}"));
        }
        if let Err(e) = self.burger.set_attribute("aria-expanded", next.aria_expanded()) {
            dom::warn(&format!("aria-expanded update failed: {e:?}"));
        }
    }
}

/// Wire the burger button to the navigation panel. Pages without either are
/// left alone.
pub fn install(
    window: &Window,
    document: &Document,
    selectors: &Selectors,
    config: &NavConfig,
) -> Result<(), JsValue> {
    let (Some(burger), Some(nav)) = (
        dom::query(document, &selectors.burger),
        dom::query(document, &selectors.nav),
    ) else {
        return Ok(());
    };
    burger.set_attribute("aria-expanded", MenuState::Closed.aria_expanded())?;
    let menu = Rc::new(Menu {
        burger: burger.clone(),
        nav: nav.clone(),
        open_class: config.open_class.clone(),
        breakpoint: config.breakpoint,
        state: Cell::new(MenuState::Closed),
    });

    let m = Rc::clone(&menu);
    dom::listen(&burger, "click", move |_: web_sys::Event| {
        m.handle(NavEvent::BurgerClicked);
    })?;

    for link in dom::query_all_in::<Element>(&nav, "a") {
        let m = Rc::clone(&menu);
        dom::listen(&link, "click", move |_: web_sys::Event| {
            m.handle(NavEvent::LinkClicked);
        })?;
    }

    let m = Rc::clone(&menu);
    dom::listen(document, "keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            m.handle(NavEvent::EscapePressed);
        }
    })?;

    let m = menu;
    let w = window.clone();
    dom::listen(window, "resize", move |_: web_sys::Event| {
        let (width, _) = dom::viewport_size(&w);
        m.handle(NavEvent::Resized(width));
    })?;
    Ok(())
}
