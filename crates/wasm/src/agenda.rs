use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use vitrine_core::PageConfig;
use vitrine_core::archive::{Agenda, ArchivePage, archive_past_events};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Document, Element, Url, Window};

use crate::dom;

/// Agenda entries as live DOM elements.
struct DomAgenda<'a> {
    document: &'a Document,
    item_selector: &'a str,
    date_selector: &'a str,
}

impl Agenda for DomAgenda<'_> {
    type Entry = Element;

    fn entries(&self) -> Vec<Element> {
        dom::query_all(self.document, self.item_selector)
    }

    fn label(&self, entry: &Element) -> Option<String> {
        dom::query_in(entry, self.date_selector).and_then(|label| label.text_content())
    }

    fn snapshot(&self, entry: &Element) -> String {
        entry.outer_html()
    }

    fn remove(&mut self, entry: &Element) {
        entry.remove();
    }
}

/// Current wall-clock time in the visitor's time zone.
fn local_now() -> Option<NaiveDateTime> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        i32::try_from(now.get_full_year()).ok()?,
        now.get_month() + 1,
        now.get_date(),
    )?
    .and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}

fn resolve(relative: &str, base: &str) -> String {
    Url::new_with_base(relative, base)
        .map(|url| url.href())
        .unwrap_or_else(|_| relative.to_string())
}

fn blob_url(html: &str) -> Result<String, JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(html));
    let options = BlobPropertyBag::new();
    options.set_type("text/html;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

/// Archive past events, then offer a link to them if any were found and the
/// agenda container exists.
pub fn run(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(now) = local_now() else {
        dom::warn("could not read the local date, agenda left as is");
        return Ok(());
    };
    let selectors = &config.selectors;
    let mut agenda = DomAgenda {
        document,
        item_selector: &selectors.agenda_item,
        date_selector: &selectors.agenda_date,
    };
    let report = archive_past_events(&mut agenda, now);
    dom::log(&format!(
        "agenda: {} archived, {} upcoming, {} undated",
        report.archived.len(),
        report.kept,
        report.undated
    ));

    let page_url = window.location().href()?;
    let base = document.base_uri()?.unwrap_or_else(|| page_url.clone());
    let archive = &config.archive;
    let Some((container, link)) = report.affordance::<_, String>(
        dom::query(document, &selectors.agenda),
        |entries| ArchivePage {
            title: archive.page_title.clone(),
            stylesheet_url: resolve(&archive.stylesheet, &base),
            background_url: resolve(&archive.background, &base),
            return_url: page_url,
            return_label: archive.return_label.clone(),
            entries,
        },
    ) else {
        return Ok(());
    };
    let link = Rc::new(RefCell::new(link));

    let anchor = document.create_element("a")?;
    anchor.set_class_name("archive-link");
    anchor.set_attribute("href", "#")?;
    anchor.set_attribute("role", "button")?;
    anchor.set_text_content(Some(&archive.link_label));

    let window = window.clone();
    dom::listen(&anchor, "click", move |event: web_sys::Event| {
        event.prevent_default();
        let mut link = link.borrow_mut();
        match link.activate(blob_url) {
            Ok(url) => {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    dom::error(&format!("could not open archive: {e:?}"));
                }
            }
            Err(e) => dom::error(&format!("could not build archive: {e:?}")),
        }
    })?;
    container.append_child(&anchor)?;
    Ok(())
}
