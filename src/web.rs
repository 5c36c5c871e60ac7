//! Browser implementation of the page traits on top of `web-sys`.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{console, Document, HtmlElement, HtmlImageElement, HtmlInputElement, Window};

use crate::element::{Checkbox, ClickHandler, Display, GraphImage, Page};
use crate::error::ViewError;
use crate::graph::ViewState;
use crate::markup::{Group, RELATIONSHIPS_IMAGE, Toggle};
use crate::sync::Synchronizer;

/// Holds a member's computed display while it is hidden.
pub const HIDDEN_DISPLAY_ATTR: &str = "data-schemaspy-display";

fn warn(msg: &str) {
    console::warn_1(&format!("schemaspy-view: {}", msg).into());
}

fn warn_on_err(result: Result<(), JsValue>) {
    if let Err(e) = result {
        warn(&ViewError::from(e).to_string());
    }
}

#[derive(Clone)]
pub struct WebCheckbox(HtmlInputElement);

impl Checkbox for WebCheckbox {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn on_click(&self, handler: ClickHandler) {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        warn_on_err(
            self.0
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
        );
        // Listeners live as long as the page.
        closure.forget();
    }
}

/// Every element carrying one class, shown and hidden together.
#[derive(Clone)]
pub struct WebGroup {
    window: Window,
    elements: Rc<Vec<HtmlElement>>,
}

impl WebGroup {
    fn computed_display(&self, el: &HtmlElement) -> String {
        match self.window.get_computed_style(el) {
            Ok(Some(style)) => style.get_property_value("display").unwrap_or_default(),
            _ => el.style().get_property_value("display").unwrap_or_default(),
        }
    }
}

fn default_display(el: &HtmlElement) -> &'static str {
    match el.tag_name().to_ascii_lowercase().as_str() {
        "td" | "th" => "table-cell",
        "tr" => "table-row",
        "tbody" | "thead" | "tfoot" => "table-row-group",
        "table" => "table",
        "li" => "list-item",
        "a" | "abbr" | "b" | "cite" | "code" | "em" | "i" | "img" | "kbd" | "label" | "q"
        | "s" | "samp" | "small" | "span" | "strong" | "sub" | "sup" | "u" | "var" => {
            "inline"
        }
        "button" | "input" | "select" | "textarea" => "inline-block",
        _ => "block",
    }
}

impl Display for WebGroup {
    /// Judged by the first member; an empty group counts as displayed.
    fn is_displayed(&self) -> bool {
        self.elements
            .first()
            .is_none_or(|el| self.computed_display(el) != "none")
    }

    fn show(&self) {
        for el in self.elements.iter() {
            let style = el.style();
            warn_on_err(style.remove_property("display").map(|_| ()));
            // The stylesheet may hide the class itself.
            if self.computed_display(el) == "none" {
                let display = el
                    .get_attribute(HIDDEN_DISPLAY_ATTR)
                    .filter(|d| !d.is_empty() && d != "none")
                    .unwrap_or_else(|| default_display(el).to_string());
                warn_on_err(style.set_property("display", &display));
            }
        }
    }

    fn hide(&self) {
        for el in self.elements.iter() {
            let display = self.computed_display(el);
            if !display.is_empty() && display != "none" {
                warn_on_err(el.set_attribute(HIDDEN_DISPLAY_ATTR, &display));
            }
            warn_on_err(el.style().set_property("display", "none"));
        }
    }
}

#[derive(Clone)]
pub struct WebImage(HtmlImageElement);

impl GraphImage for WebImage {
    fn set_use_map(&self, map: &str) {
        self.0.set_use_map(map);
    }

    fn set_src(&self, src: &str) {
        self.0.set_src(src);
    }
}

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn from_window() -> Result<Self, ViewError> {
        let window = web_sys::window().ok_or(ViewError::NoWindow)?;
        let document = window.document().ok_or(ViewError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element_by_id<T: JsCast>(&self, id: &str, expected: &'static str) -> Option<T> {
        let el = self.document.get_element_by_id(id)?;
        match el.dyn_into::<T>() {
            Ok(el) => Some(el),
            Err(_) => {
                let err = ViewError::WrongElement {
                    id: id.to_string(),
                    expected,
                };
                warn(&err.to_string());
                None
            }
        }
    }

    /// The `table` global set by legacy table pages; empty means none.
    pub fn global_table(&self) -> Option<String> {
        js_sys::Reflect::get(&self.window, &JsValue::from_str("table"))
            .ok()
            .and_then(|v| v.as_string())
            .filter(|t| !t.is_empty())
    }
}

impl Page for WebPage {
    type Checkbox = WebCheckbox;
    type Target = WebGroup;
    type Image = WebImage;

    fn checkbox(&self, toggle: Toggle) -> Option<WebCheckbox> {
        self.element_by_id::<HtmlInputElement>(toggle.id(), "an <input>")
            .map(WebCheckbox)
    }

    fn group(&self, group: Group) -> WebGroup {
        let mut elements = Vec::new();
        match self.document.query_selector_all(&group.selector()) {
            Ok(nodes) => {
                for i in 0..nodes.length() {
                    if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                        elements.push(el);
                    }
                }
            }
            Err(e) => warn(&ViewError::from(e).to_string()),
        }
        WebGroup {
            window: self.window.clone(),
            elements: Rc::new(elements),
        }
    }

    fn image(&self) -> Option<WebImage> {
        self.element_by_id::<HtmlImageElement>(RELATIONSHIPS_IMAGE, "an <img>")
            .map(WebImage)
    }
}

fn wire(page: WebPage, state: ViewState) {
    let sync = Synchronizer::new(page, state);
    let wiring = sync.ready();
    if !wiring.has_image {
        warn(&format!("no #{} image on page", RELATIONSHIPS_IMAGE));
    }
    let missing: Vec<&str> = wiring.missing.iter().map(|t| t.id()).collect();
    console::log_1(
        &format!(
            "schemaspy-view: {} bindings, {} image triggers ({}), missing: [{}]",
            wiring.bindings,
            wiring.image_triggers,
            sync.state().table_name().unwrap_or("summary"),
            missing.join(", ")
        )
        .into(),
    );
}

/// Run `f` once `DOMContentLoaded` fires on `document`.
pub fn defer_until_loaded<F>(document: &Document, f: F) -> Result<(), ViewError>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::<dyn FnMut()>::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` now if the markup is parsed, otherwise once it is.
pub fn when_ready<F>(document: &Document, f: F) -> Result<(), ViewError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        defer_until_loaded(document, f)
    } else {
        f();
        Ok(())
    }
}

/// Wire the page once its markup is parsed, resolving the context at that point.
pub fn attach_with<F>(resolve: F) -> Result<(), ViewError>
where
    F: FnOnce(&WebPage) -> ViewState + 'static,
{
    let page = WebPage::from_window()?;
    let document = page.document.clone();
    when_ready(&document, move || {
        let state = resolve(&page);
        wire(page, state);
    })
}

pub fn attach(state: ViewState) -> Result<(), ViewError> {
    attach_with(move |_| state)
}
