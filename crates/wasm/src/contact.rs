use vitrine_core::config::ContactMessages;
use vitrine_core::contact::{SubmitOutcome, interpret_response};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, FormData, Headers, HtmlFormElement, Request, RequestInit, Response, Window};

use crate::dom;

/// POST the form to its `action` and classify the reply.
async fn submit(window: &Window, form: &HtmlFormElement) -> SubmitOutcome {
    let request = match build_request(form) {
        Ok(request) => request,
        Err(e) => return SubmitOutcome::NetworkFailure(format!("{e:?}")),
    };
    let response = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(value) => value,
        Err(e) => return SubmitOutcome::NetworkFailure(format!("{e:?}")),
    };
    let Ok(response) = response.dyn_into::<Response>() else {
        return SubmitOutcome::NetworkFailure("not a Response".into());
    };
    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    interpret_response(response.ok(), &body)
}

fn build_request(form: &HtmlFormElement) -> Result<Request, JsValue> {
    let data = FormData::new_with_form(form)?;
    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    init.set_headers(&headers);
    Request::new_with_str_and_init(&form.action(), &init)
}

/// Take over submission of the contact form, if the page has one.
pub fn install(
    window: &Window,
    document: &Document,
    selector: &str,
    messages: &ContactMessages,
) -> Result<(), JsValue> {
    let Some(form) = dom::query(document, selector).and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let window = window.clone();
    let messages = messages.clone();
    let target = form.clone();
    dom::listen(&target, "submit", move |event: web_sys::Event| {
        event.prevent_default();
        let window = window.clone();
        let form = form.clone();
        let messages = messages.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit(&window, &form).await;
            if outcome.is_sent() {
                form.reset();
            } else {
                dom::error(&format!("contact form not sent: {outcome:?}"));
            }
            if let Err(e) = window.alert_with_message(&outcome.user_message(&messages)) {
                dom::warn(&format!("alert failed: {e:?}"));
            }
        });
    })
}
