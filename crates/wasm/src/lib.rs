mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Location, MouseEvent};
use xref_view_core::links::IdentLinks;
use xref_view_core::{
    LineRangeController, Modifiers, RequestSequence, Tag, Ticket, ViewerConfig,
};
use xref_view_protocol::{IdentResponse, SuggestionPayload};

use crate::dom::WebDom;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Controller and page, shared by the event listeners of one source view.
struct Selector {
    controller: LineRangeController,
    dom: WebDom,
}

/// Install the line range handlers on the current page.
///
/// `config` is an optional JSON object overriding [`ViewerConfig`] fields.
/// Returns `false` without doing anything when the page has no line-number
/// column (i.e. it is not a source view).
#[wasm_bindgen]
pub fn setup_line_range_handlers(config: Option<String>) -> Result<bool, JsError> {
    let config = match config {
        Some(json) => ViewerConfig::from_json(&json).map_err(|e| JsError::new(&e.to_string()))?,
        None => ViewerConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsError::new("no document"))?;

    let Some(line_numbers) = document
        .query_selector(&config.line_numbers_selector)
        .map_err(js_error)?
    else {
        return Ok(false);
    };
    let scroller = document
        .query_selector(&config.scroll_container_selector)
        .map_err(js_error)?;

    let location = window.location();
    let selector = Rc::new(RefCell::new(Selector {
        controller: LineRangeController::new(config),
        dom: WebDom::new(document, scroller),
    }));

    {
        let mut guard = selector.borrow_mut();
        let Selector { controller, dom } = &mut *guard;
        controller.on_load(&current_hash(&location), dom);
    }

    let on_hash_change = {
        let selector = Rc::clone(&selector);
        let location = location.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let mut guard = selector.borrow_mut();
            let Selector { controller, dom } = &mut *guard;
            controller.on_hash_change(&current_hash(&location), dom);
        })
    };
    window
        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_hash_change.forget();

    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
        let target_id = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id())
            .unwrap_or_default();
        let modifiers = Modifiers {
            shift: ev.shift_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        };

        let response = {
            let mut guard = selector.borrow_mut();
            let Selector { controller, dom } = &mut *guard;
            controller.on_click(&target_id, modifiers, dom)
        };
        if response.prevent_default {
            ev.prevent_default();
        }
        // Publishing the fragment fires `hashchange`, which re-renders the
        // same selection.
        if let Some(hash) = response.hash
            && let Err(e) = location.set_hash(&hash)
        {
            web_sys::console::error_1(&format!("xref: cannot set hash {hash}: {e:?}").into());
        }
    });
    line_numbers
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_click.forget();

    Ok(true)
}

/// Filter the sidebar's version tags.
///
/// `tags` is a JSON array of `{ "name", "href" }`; the result is a JSON array
/// of `{ "href", "html" }`.
#[wasm_bindgen]
pub fn filter_tags(filter: &str, tags: &str) -> Result<String, JsError> {
    let tags: Vec<Tag> = serde_json::from_str(tags).map_err(|e| JsError::new(&e.to_string()))?;
    let found = xref_view_core::filter_tags(filter, &tags);
    serde_json::to_string(&found).map_err(|e| JsError::new(&e.to_string()))
}

/// Resolve an ident lookup body into source-view links, grouped like the
/// response itself. Each line carries its `peek` preview when the backend
/// sent one.
#[wasm_bindgen]
pub fn ident_links(project: &str, version: &str, body: &str) -> Result<String, JsError> {
    let response = IdentResponse::from_json(body).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&IdentLinks::new(project, version, &response))
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Orders lookups whose responses may arrive out of order: only the response
/// of the latest [`LookupSequence::begin`] should be rendered.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct LookupSequence {
    inner: RequestSequence,
}

/// Handle returned by [`LookupSequence::begin`].
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct LookupTicket(Ticket);

#[wasm_bindgen]
impl LookupSequence {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> LookupTicket {
        LookupTicket(self.inner.begin())
    }

    #[wasm_bindgen(js_name = isCurrent)]
    pub fn is_current(&self, ticket: &LookupTicket) -> bool {
        self.inner.is_current(ticket.0)
    }
}

/// Classify an autocomplete body. Returns JSON: an array of
/// `{ "value", "label" }`, or `{ "html": ... }` for prerendered fragments.
#[wasm_bindgen]
pub fn parse_suggestions(body: &str) -> Result<String, JsError> {
    let json = match SuggestionPayload::from_body(body) {
        SuggestionPayload::Json(items) => serde_json::to_string(&items),
        SuggestionPayload::Html(html) => serde_json::to_string(&serde_json::json!({ "html": html })),
    };
    json.map_err(|e| JsError::new(&e.to_string()))
}

fn current_hash(location: &Location) -> String {
    location.hash().unwrap_or_default()
}

fn js_error(value: JsValue) -> JsError {
    JsError::new(&format!("{value:?}"))
}
