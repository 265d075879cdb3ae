// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document lookups and the initialization error type.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList};

use vitrine_core::trace::InitStatus;

/// Why a controller did not attach.
///
/// A missing element is the normal way for a page to opt out of a widget,
/// so [`Missing`](Self::Missing) and [`Empty`](Self::Empty) are expected on
/// most pages. [`Dom`](Self::Dom) means the browser rejected a call.
#[derive(Clone, Debug)]
pub enum InitError {
    /// No element matched the given id or selector.
    Missing(&'static str),
    /// The selector matched nothing where at least one element is needed.
    Empty(&'static str),
    /// A DOM call threw.
    Dom(JsValue),
}

impl InitError {
    /// The trace status this error reports as.
    #[must_use]
    pub fn status(&self) -> InitStatus {
        match self {
            Self::Missing(what) => InitStatus::Missing(*what),
            Self::Empty(what) => InitStatus::Empty(*what),
            Self::Dom(_) => InitStatus::Failed,
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(what) => write!(f, "required element `{what}` not found"),
            Self::Empty(what) => write!(f, "no elements match `{what}`"),
            Self::Dom(err) => write!(f, "DOM call failed: {err:?}"),
        }
    }
}

impl core::error::Error for InitError {}

impl From<JsValue> for InitError {
    fn from(err: JsValue) -> Self {
        Self::Dom(err)
    }
}

/// The page's document, if running in a window.
pub fn document() -> Result<Document, InitError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(InitError::Missing("document"))
}

/// The element with `id`, or [`InitError::Missing`].
pub fn required<T: JsCast>(doc: &Document, id: &'static str) -> Result<T, InitError> {
    optional(doc, id).ok_or(InitError::Missing(id))
}

/// The element with `id`, if present and of type `T`.
#[must_use]
pub fn optional<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into().ok()
}

/// Every element under `doc` matching `selector`, or [`InitError::Empty`].
pub fn all(doc: &Document, selector: &'static str) -> Result<Vec<HtmlElement>, InitError> {
    let found = elements(doc.query_selector_all(selector)?);
    if found.is_empty() {
        return Err(InitError::Empty(selector));
    }
    Ok(found)
}

/// Every element under `root` matching `selector`; empty on a bad selector.
#[must_use]
pub fn all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// The first element under `root` matching `selector`, if it is a `T`.
#[must_use]
pub fn first_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok()??.dyn_into().ok()
}

/// Text of the first element under `root` matching `selector`, or `""`.
#[must_use]
pub fn text_in(root: &Element, selector: &str) -> String {
    first_in::<Element>(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into().ok())
        .collect()
}

/// Sets one inline style property; failures are ignored.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Adds or removes `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Locks (or unlocks) page scrolling behind a modal.
pub fn lock_scroll(doc: &Document, locked: bool) {
    if let Some(body) = doc.body() {
        if locked {
            set_style(&body, "overflow", "hidden");
        } else {
            let _ = body.style().remove_property("overflow");
        }
    }
}

/// Current vertical scroll offset of the window.
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
