use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::frame::background_commands;
use vitrine_core::parallax::Parallax;
use vitrine_core::title_bar::TitleBar;
use vitrine_core::{FrameScheduler, PageConfig, ResizePass, ScrollFrame, Throttle};
use vitrine_protocol::{Rect, StyleCommand, StyleTarget, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

/// Runs throttled work on the next `requestAnimationFrame`.
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            dom::error(&format!("requestAnimationFrame failed: {e:?}"));
        }
    }
}

struct Bar {
    element: HtmlElement,
    translator: TitleBar,
}

/// The title bar and sections of the page, plus the engine driving them.
pub struct ScrollEffects {
    window: Window,
    bar: Option<Bar>,
    sections: Vec<HtmlElement>,
    card_selector: String,
    engine: Parallax,
}

impl ScrollEffects {
    pub fn discover(window: Window, document: &Document, config: &PageConfig) -> Self {
        let selectors = &config.selectors;
        let bar = dom::query_html(document, &selectors.title_bar).map(|element| {
            let translator = TitleBar::new(f64::from(element.offset_height()), &config.scroll);
            Bar {
                element,
                translator,
            }
        });
        let sections: Vec<HtmlElement> = dom::query_all(document, &selectors.sections);
        dom::log(&format!(
            "{} sections, title bar {}",
            sections.len(),
            if bar.is_some() { "found" } else { "absent" }
        ));

        let effects = Self {
            window,
            bar,
            sections,
            card_selector: selectors.card.clone(),
            engine: Parallax::new(config.scroll.clone()),
        };
        effects.set_backgrounds(&selectors.background_attr);
        effects
    }

    pub fn resize_pass(&self) -> ResizePass {
        self.engine.config().resize_pass()
    }

    /// Expose each section's declared image to CSS as `--bg`.
    fn set_backgrounds(&self, attr: &str) {
        let urls: Vec<Option<String>> = self
            .sections
            .iter()
            .map(|s| s.get_attribute(attr))
            .collect();
        self.apply(&background_commands(&urls));
    }

    /// Geometry pass.
    pub fn measure(&mut self) {
        let (_, view_h) = dom::viewport_size(&self.window);
        let card_heights: Vec<Option<f64>> = self
            .sections
            .iter()
            .map(|section| {
                dom::query_in(section, &self.card_selector)
                    .map(|card| card.get_bounding_client_rect().height())
            })
            .collect();
        self.engine.measure(&card_heights, view_h);
    }

    /// Update pass over the current layout.
    pub fn tick(&self) {
        let (_, view_h) = dom::viewport_size(&self.window);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport = Viewport::new(view_h, scroll_y);
        let rects: Vec<Rect> = self
            .sections
            .iter()
            .map(|s| {
                let r = s.get_bounding_client_rect();
                Rect::new(r.x(), r.y(), r.width(), r.height())
            })
            .collect();
        let frame = ScrollFrame::compute(
            self.bar.as_ref().map(|b| &b.translator),
            &self.engine,
            &viewport,
            &rects,
        );
        self.apply(&frame.commands());
    }

    fn element(&self, target: StyleTarget) -> Option<&HtmlElement> {
        match target {
            StyleTarget::TitleBar => self.bar.as_ref().map(|b| &b.element),
            StyleTarget::Section(i) => self.sections.get(i),
        }
    }

    fn apply(&self, commands: &[StyleCommand]) {
        for command in commands {
            let Some(element) = self.element(command.target()) else {
                continue;
            };
            let style = element.style();
            let result = match command {
                StyleCommand::SetProperty {
                    property, value, ..
                } => style.set_property(property.css_name(), value),
                StyleCommand::SetTransform { value, .. } => style.set_property("transform", value),
            };
            if let Err(e) = result {
                dom::warn(&format!("style update failed: {e:?}"));
            }
        }
    }
}

/// Measure, paint the first frame, and bind the throttled update to `scroll`
/// and `resize`. Resizes re-measure first only when configured.
pub fn install(window: &Window, effects: &Rc<RefCell<ScrollEffects>>) -> Result<(), JsValue> {
    effects.borrow_mut().measure();
    effects.borrow().tick();

    let scheduler: Rc<dyn FrameScheduler> = Rc::new(RafScheduler::new(window.clone()));
    let fx = Rc::clone(effects);
    let update = Throttle::new(scheduler, move |()| fx.borrow().tick());

    let on_scroll = update.clone();
    dom::listen(window, "scroll", move |_: web_sys::Event| on_scroll.call(()))?;

    let fx = Rc::clone(effects);
    dom::listen(window, "resize", move |_: web_sys::Event| {
        if fx.borrow().resize_pass() == ResizePass::MeasureThenUpdate {
            fx.borrow_mut().measure();
        }
        update.call(());
    })
}
