// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery page controllers: category filter, lightbox and before/after
//! sliders.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Rect};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement, KeyboardEvent,
    MouseEvent, TouchEvent,
};

use vitrine_core::backend::{CyclerPresenter, FilterPresenter};
use vitrine_core::comparison::{Comparison, percentage_across};
use vitrine_core::cycler::{Cycler, Transition};
use vitrine_core::filter::{DimensionId, FilterSet, FilterValue, Item, Policy, Visibility};
use vitrine_core::time::Duration;
use vitrine_core::trace::{ComparisonEvent, Component, CycleEvent, FilterEvent, InputSource};

use crate::diagnostics::Diagnostics;
use crate::dom::{self, InitError, set_class, set_style};
use crate::listener::Listener;
use crate::page::Context;
use crate::timer::Timeout;

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Fades gallery items in and out as the category changes.
///
/// Shown items get `display: block` at once and fade in after a short delay;
/// hidden items fade out and leave layout once the transition is over. A new
/// selection cancels any transition still pending on the same item.
struct GalleryPresenter {
    items: Vec<HtmlElement>,
    pending: Vec<Option<Timeout>>,
    show_delay: Duration,
    hide_delay: Duration,
    hidden_scale: f32,
    dim_opacity: f32,
}

impl FilterPresenter for GalleryPresenter {
    fn set_visibility(&mut self, index: usize, visibility: Visibility) {
        let Some(item) = self.items.get(index).cloned() else {
            return;
        };
        let timer = match visibility {
            Visibility::Shown => {
                set_style(&item, "display", "block");
                set_style(&item, "pointer-events", "auto");
                Some(Timeout::new(self.show_delay, move || {
                    set_style(&item, "opacity", "1");
                    set_style(&item, "transform", "scale(1)");
                }))
            }
            Visibility::Dimmed => {
                set_style(&item, "opacity", &format!("{}", self.dim_opacity));
                set_style(&item, "pointer-events", "none");
                None
            }
            Visibility::Hidden => {
                set_style(&item, "opacity", "0");
                set_style(&item, "transform", &format!("scale({})", self.hidden_scale));
                Some(Timeout::new(self.hide_delay, move || {
                    set_style(&item, "display", "none");
                }))
            }
        };
        if let Some(slot) = self.pending.get_mut(index) {
            *slot = timer;
        }
    }
}

struct GalleryFilterState {
    filters: FilterSet,
    category: DimensionId,
    buttons: Vec<HtmlElement>,
    values: Vec<String>,
    presenter: GalleryPresenter,
    diagnostics: Diagnostics,
}

impl GalleryFilterState {
    fn select(&mut self, button: usize) {
        let Some(raw) = self.values.get(button) else {
            return;
        };
        for (i, b) in self.buttons.iter().enumerate() {
            set_class(b, "active", i == button);
        }
        let outcome = self
            .filters
            .apply_filter(self.category, FilterValue::parse(raw));
        outcome.present(&mut self.presenter);
        self.diagnostics.emit(|t| {
            t.filter(&FilterEvent {
                component: Component::GalleryFilter,
                dimension: "category",
                value: raw,
                changed: outcome.changed.len(),
                visible: outcome.visible,
            });
        });
    }
}

/// Category buttons over the gallery grid.
pub struct GalleryFilter {
    state: Rc<RefCell<GalleryFilterState>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for GalleryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let visible = self.state.try_borrow().map(|s| s.filters.visible_count()).ok();
        f.debug_struct("GalleryFilter")
            .field("visible", &visible)
            .finish_non_exhaustive()
    }
}

impl GalleryFilter {
    /// Wires `.gallery-filter-btn` buttons to the `.gallery-item` grid.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let buttons = dom::all(&cx.document, ".gallery-filter-btn")?;
        let items = dom::all(&cx.document, ".gallery-item").unwrap_or_default();

        let mut filters = FilterSet::new();
        let category = filters.add_dimension("category", Policy::Hide);
        for item in &items {
            let mut tagged = Item::new();
            if let Some(tag) = item.get_attribute("data-category") {
                tagged = tagged.with_tag(category, tag);
            }
            filters.push_item(tagged);
        }
        let values = buttons
            .iter()
            .map(|b| b.get_attribute("data-filter").unwrap_or_default())
            .collect();

        let presenter = GalleryPresenter {
            pending: items.iter().map(|_| None).collect(),
            items,
            show_delay: cx.config.gallery_show_delay,
            hide_delay: cx.config.gallery_hide_delay,
            hidden_scale: cx.config.hidden_scale,
            dim_opacity: cx.config.dim_opacity,
        };
        let state = Rc::new(RefCell::new(GalleryFilterState {
            filters,
            category,
            buttons: buttons.clone(),
            values,
            presenter,
            diagnostics: cx.diagnostics.clone(),
        }));

        let mut listeners = Vec::with_capacity(buttons.len());
        for (i, button) in buttons.iter().enumerate() {
            let state = Rc::clone(&state);
            listeners.push(Listener::new(button, "click", move |_: Event| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.select(i);
                }
            })?);
        }
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }
}

// ---------------------------------------------------------------------------
// Lightbox
// ---------------------------------------------------------------------------

/// One image the lightbox can show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    /// Image URL.
    pub src: String,
    /// Caption heading.
    pub title: String,
    /// Caption subtitle.
    pub category: String,
}

/// Renders the current slide; borrows the slide list from the cycler.
struct LightboxFrame<'a> {
    document: &'a Document,
    image: Option<&'a HtmlImageElement>,
    caption: Option<&'a HtmlElement>,
    slides: &'a [Slide],
}

impl CyclerPresenter for LightboxFrame<'_> {
    fn show(&mut self, transition: Transition) {
        let Some(slide) = self.slides.get(transition.to) else {
            return;
        };
        if let Some(image) = self.image {
            image.set_src(&slide.src);
        }
        if let Some(caption) = self.caption {
            caption.set_text_content(None);
            for (tag, text) in [("h3", &slide.title), ("p", &slide.category)] {
                if let Ok(el) = self.document.create_element(tag) {
                    el.set_text_content(Some(text.as_str()));
                    let _ = caption.append_child(&el);
                }
            }
        }
    }
}

struct LightboxState {
    cycler: Cycler<Slide>,
    is_open: bool,
    lightbox: HtmlElement,
    image: Option<HtmlImageElement>,
    caption: Option<HtmlElement>,
    document: Document,
    diagnostics: Diagnostics,
}

impl LightboxState {
    fn render(&self, transition: Transition) {
        LightboxFrame {
            document: &self.document,
            image: self.image.as_ref(),
            caption: self.caption.as_ref(),
            slides: self.cycler.items(),
        }
        .show(transition);
        self.diagnostics.emit(|t| {
            t.cycle(&CycleEvent {
                component: Component::Lightbox,
                from: transition.from,
                to: transition.to,
                len: self.cycler.len(),
            });
        });
    }

    fn open(&mut self, index: usize) {
        self.is_open = true;
        set_class(&self.lightbox, "active", true);
        dom::lock_scroll(&self.document, true);
        let transition = self.cycler.go_to(index);
        self.render(transition);
    }

    fn close(&mut self) {
        self.is_open = false;
        set_class(&self.lightbox, "active", false);
        dom::lock_scroll(&self.document, false);
    }

    fn next(&mut self) {
        let transition = self.cycler.next();
        self.render(transition);
    }

    fn previous(&mut self) {
        let transition = self.cycler.previous();
        self.render(transition);
    }

    fn key(&mut self, key: &str) {
        if !self.is_open {
            return;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.previous(),
            _ => {}
        }
    }
}

/// Full-screen image viewer over the gallery.
pub struct Lightbox {
    state: Rc<RefCell<LightboxState>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.try_borrow().ok();
        f.debug_struct("Lightbox")
            .field("open", &state.as_ref().map(|s| s.is_open))
            .field("index", &state.as_ref().map(|s| s.cycler.index()))
            .finish_non_exhaustive()
    }
}

fn slide_for(button: &Element) -> Slide {
    let Some(item) = button.closest(".gallery-item").ok().flatten() else {
        return Slide::default();
    };
    Slide {
        src: dom::first_in::<HtmlImageElement>(&item, ".gallery-image img")
            .map(|img| img.src())
            .unwrap_or_default(),
        title: dom::text_in(&item, ".gallery-info h3"),
        category: dom::text_in(&item, ".gallery-category"),
    }
}

impl Lightbox {
    /// Wires `#lightbox` to every `.gallery-btn`.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let doc = &cx.document;
        let lightbox: HtmlElement = dom::required(doc, "lightbox")?;
        let buttons = dom::all(doc, ".gallery-btn")?;
        let slides = buttons.iter().map(|b| slide_for(b)).collect();
        let cycler = Cycler::new(slides).ok_or(InitError::Empty(".gallery-btn"))?;

        let state = Rc::new(RefCell::new(LightboxState {
            cycler,
            is_open: false,
            lightbox: lightbox.clone(),
            image: dom::optional(doc, "lightbox-image"),
            caption: dom::optional(doc, "lightbox-caption"),
            document: doc.clone(),
            diagnostics: cx.diagnostics.clone(),
        }));

        let on = |target: &Element, action: fn(&mut LightboxState)| {
            let state = Rc::clone(&state);
            Listener::new(target, "click", move |_: Event| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    action(&mut state);
                }
            })
        };

        let mut listeners = Vec::new();
        for (i, button) in buttons.iter().enumerate() {
            let state = Rc::clone(&state);
            listeners.push(Listener::new(button, "click", move |_: Event| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.open(i);
                }
            })?);
        }
        if let Some(close) = dom::optional::<Element>(doc, "lightbox-close") {
            listeners.push(on(&close, LightboxState::close)?);
        }
        if let Some(next) = dom::optional::<Element>(doc, "lightbox-next") {
            listeners.push(on(&next, LightboxState::next)?);
        }
        if let Some(prev) = dom::optional::<Element>(doc, "lightbox-prev") {
            listeners.push(on(&prev, LightboxState::previous)?);
        }
        if let Some(overlay) = dom::first_in::<Element>(&lightbox, ".lightbox-overlay") {
            listeners.push(on(&overlay, LightboxState::close)?);
        }
        let keys = Rc::clone(&state);
        listeners.push(Listener::new(doc, "keydown", move |e: KeyboardEvent| {
            if let Ok(mut state) = keys.try_borrow_mut() {
                state.key(&e.key());
            }
        })?);

        Ok(Self {
            state,
            _listeners: listeners,
        })
    }
}

// ---------------------------------------------------------------------------
// Before/after
// ---------------------------------------------------------------------------

struct Slider {
    index: usize,
    comparison: Comparison,
    item: HtmlElement,
    handle: HtmlInputElement,
    after: HtmlElement,
    diagnostics: Diagnostics,
}

impl Slider {
    fn bounds(&self) -> Rect {
        let r = self.item.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn clip(&self) {
        set_style(
            &self.after,
            "clip-path",
            &format!("inset(0 {}% 0 0)", self.comparison.clip_inset()),
        );
    }

    fn report(&self, source: InputSource, requested: f64, accepted: bool) {
        let slider = self.index;
        self.diagnostics.emit(|t| {
            t.comparison(&ComparisonEvent {
                slider,
                source,
                requested,
                accepted,
            });
        });
    }

    fn on_input(&mut self) {
        let raw = self.handle.value();
        let accepted = self.comparison.set_from_input(&raw).is_some();
        if accepted {
            self.clip();
        }
        let requested = raw.trim().parse().unwrap_or(f64::NAN);
        self.report(InputSource::Range, requested, accepted);
    }

    fn on_move(&mut self, source: InputSource, client: Point) {
        if source == InputSource::Pointer && !self.comparison.is_dragging() {
            return;
        }
        let bounds = self.bounds();
        let Some(requested) = percentage_across(client, bounds) else {
            return;
        };
        let result = match source {
            InputSource::Touch => self.comparison.touch_move(client, bounds),
            _ => self.comparison.pointer_move(client, bounds),
        };
        if let Some(position) = result {
            self.handle.set_value(&format!("{position}"));
            self.clip();
        }
        self.report(source, requested, result.is_some());
    }
}

/// Draggable before/after comparisons (`.ba-item`).
pub struct BeforeAfter {
    sliders: Vec<Rc<RefCell<Slider>>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for BeforeAfter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BeforeAfter")
            .field("sliders", &self.sliders.len())
            .finish_non_exhaustive()
    }
}

impl BeforeAfter {
    /// Wires every `.ba-item` that has both a `.ba-handle` and a `.ba-after`.
    ///
    /// Items missing either part are skipped.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let items = dom::all(&cx.document, ".ba-item")?;
        let mut sliders = Vec::new();
        let mut listeners = Vec::new();

        for item in items {
            let (Some(handle), Some(after)) = (
                dom::first_in::<HtmlInputElement>(&item, ".ba-handle"),
                dom::first_in::<HtmlElement>(&item, ".ba-after"),
            ) else {
                continue;
            };
            let mut comparison = Comparison::new();
            // Start from whatever the markup's range input says.
            let _ = comparison.set_from_input(&handle.value());
            let slider = Rc::new(RefCell::new(Slider {
                index: sliders.len(),
                comparison,
                item: item.clone(),
                handle: handle.clone(),
                after,
                diagnostics: cx.diagnostics.clone(),
            }));

            let s = Rc::clone(&slider);
            listeners.push(Listener::new(&handle, "input", move |_: Event| {
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.on_input();
                }
            })?);
            let s = Rc::clone(&slider);
            listeners.push(Listener::new(&item, "mousedown", move |_: MouseEvent| {
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.comparison.pointer_down();
                }
            })?);
            let s = Rc::clone(&slider);
            listeners.push(Listener::new(&cx.document, "mouseup", move |_: MouseEvent| {
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.comparison.pointer_up();
                }
            })?);
            let s = Rc::clone(&slider);
            listeners.push(Listener::new(&item, "mousemove", move |e: MouseEvent| {
                let client = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.on_move(InputSource::Pointer, client);
                }
            })?);
            let s = Rc::clone(&slider);
            listeners.push(Listener::new(&item, "touchmove", move |e: TouchEvent| {
                let Some(touch) = e.touches().get(0) else {
                    return;
                };
                let client = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
                if let Ok(mut s) = s.try_borrow_mut() {
                    s.on_move(InputSource::Touch, client);
                }
            })?);
            sliders.push(slider);
        }

        Ok(Self {
            sliders,
            _listeners: listeners,
        })
    }

    /// Current reveal position of every slider, in page order.
    #[must_use]
    pub fn positions(&self) -> Vec<f64> {
        self.sliders
            .iter()
            .filter_map(|s| s.try_borrow().ok().map(|s| s.comparison.position()))
            .collect()
    }
}
