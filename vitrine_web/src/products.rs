// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Product listing controllers: filters, sort, quick view, wishlist, cart and
//! load more.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use web_sys::{
    Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlSelectElement,
};

use vitrine_core::backend::FilterPresenter;
use vitrine_core::catalog::{ALL_LOADED, CartBadge, LOADING_LABEL, Quantity, Wishlist};
use vitrine_core::filter::{DimensionId, FilterSet, FilterValue, Item, Policy, Visibility};
use vitrine_core::sort::{ProductKey, SortKey, sort_order};
use vitrine_core::trace::{Component, FilterEvent};

use crate::diagnostics::Diagnostics;
use crate::dom::{self, InitError, set_class, set_style};
use crate::listener::Listener;
use crate::page::Context;
use crate::timer::Timeout;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

struct CardPresenter {
    cards: Vec<HtmlElement>,
    count: Option<HtmlElement>,
    dim_opacity: String,
}

impl FilterPresenter for CardPresenter {
    fn set_visibility(&mut self, index: usize, visibility: Visibility) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        match visibility {
            Visibility::Shown => {
                set_style(card, "display", "block");
                set_style(card, "opacity", "1");
                set_style(card, "pointer-events", "auto");
            }
            Visibility::Dimmed => {
                set_style(card, "display", "block");
                set_style(card, "opacity", &self.dim_opacity);
                set_style(card, "pointer-events", "none");
            }
            Visibility::Hidden => set_style(card, "display", "none"),
        }
    }

    fn set_visible_count(&mut self, count: usize) {
        if let Some(el) = &self.count {
            el.set_inner_html(&format!("Showing <strong>{count}</strong> products"));
        }
    }
}

/// One row of filter buttons bound to a dimension.
struct ButtonRow {
    dimension: DimensionId,
    name: &'static str,
    buttons: Vec<HtmlElement>,
    values: Vec<String>,
}

struct FilterState {
    filters: FilterSet,
    rows: Vec<ButtonRow>,
    presenter: CardPresenter,
    diagnostics: Diagnostics,
}

impl FilterState {
    fn select(&mut self, row: usize, button: usize) {
        let Some(row) = self.rows.get(row) else {
            return;
        };
        let Some(raw) = row.values.get(button) else {
            return;
        };
        for (i, b) in row.buttons.iter().enumerate() {
            set_class(b, "active", i == button);
        }
        let outcome = self
            .filters
            .apply_filter(row.dimension, FilterValue::parse(raw));
        outcome.present(&mut self.presenter);
        self.diagnostics.emit(|t| {
            t.filter(&FilterEvent {
                component: Component::ProductFilter,
                dimension: row.name,
                value: raw,
                changed: outcome.changed.len(),
                visible: outcome.visible,
            });
        });
    }
}

/// Category (`.filter-btn`) and color (`.color-btn`) filters over the
/// `.product-card` grid.
///
/// Both rows share one [`FilterSet`]: a category mismatch hides a card, a
/// color mismatch dims it, and `#product-count` shows how many cards match
/// both.
pub struct ProductFilters {
    state: Rc<RefCell<FilterState>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for ProductFilters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let visible = self.state.try_borrow().map(|s| s.filters.visible_count()).ok();
        f.debug_struct("ProductFilters")
            .field("visible", &visible)
            .finish_non_exhaustive()
    }
}

impl ProductFilters {
    /// Wires whichever button rows exist; fails only if neither does.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let doc = &cx.document;
        let category_buttons = dom::all(doc, ".filter-btn").unwrap_or_default();
        let color_buttons = dom::all(doc, ".color-btn").unwrap_or_default();
        if category_buttons.is_empty() && color_buttons.is_empty() {
            return Err(InitError::Empty(".filter-btn"));
        }
        let cards = dom::all(doc, ".product-card").unwrap_or_default();

        let mut filters = FilterSet::new();
        let category = filters.add_dimension("category", Policy::Hide);
        let color = filters.add_dimension("color", Policy::Dim);
        for card in &cards {
            let mut item = Item::new();
            if let Some(tag) = card.get_attribute("data-category") {
                item = item.with_tag(category, tag);
            }
            if let Some(tag) = card.get_attribute("data-color") {
                item = item.with_tag(color, tag);
            }
            filters.push_item(item);
        }

        let row = |dimension, name, buttons: Vec<HtmlElement>, attr: &str| {
            let values = buttons
                .iter()
                .map(|b| b.get_attribute(attr).unwrap_or_default())
                .collect();
            ButtonRow {
                dimension,
                name,
                buttons,
                values,
            }
        };
        let rows = [
            row(category, "category", category_buttons, "data-category"),
            row(color, "color", color_buttons, "data-color"),
        ];
        let wiring: Vec<(usize, Vec<HtmlElement>)> = rows
            .iter()
            .enumerate()
            .map(|(r, row)| (r, row.buttons.clone()))
            .collect();

        let state = Rc::new(RefCell::new(FilterState {
            filters,
            rows: rows.into(),
            presenter: CardPresenter {
                cards,
                count: dom::optional(doc, "product-count"),
                dim_opacity: format!("{}", cx.config.dim_opacity),
            },
            diagnostics: cx.diagnostics.clone(),
        }));

        let mut listeners = Vec::new();
        for (r, buttons) in wiring {
            for (i, button) in buttons.iter().enumerate() {
                let state = Rc::clone(&state);
                listeners.push(Listener::new(button, "click", move |_: Event| {
                    if let Ok(mut state) = state.try_borrow_mut() {
                        state.select(r, i);
                    }
                })?);
            }
        }
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

fn product_key(card: &Element) -> ProductKey {
    ProductKey::from_text(
        &dom::text_in(card, ".product-price"),
        &dom::text_in(card, ".product-title"),
    )
}

/// Reorders `#products-grid` when `#sort-filter` changes.
#[derive(Debug)]
pub struct ProductSort {
    _listener: Listener,
}

impl ProductSort {
    /// Wires the sort select to the grid.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let select: HtmlSelectElement = dom::required(&cx.document, "sort-filter")?;
        let grid: HtmlElement = dom::required(&cx.document, "products-grid")?;
        let handle = select.clone();
        let listener = Listener::new(&select, "change", move |_: Event| {
            let key = SortKey::parse(&handle.value());
            let cards = dom::all_in(&grid, ".product-card");
            let keys: Vec<ProductKey> = cards.iter().map(|c| product_key(c)).collect();
            for i in sort_order(&keys, key) {
                // Appending an attached node moves it to the end.
                let _ = grid.append_child(&cards[i]);
            }
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}

// ---------------------------------------------------------------------------
// Quick view
// ---------------------------------------------------------------------------

/// Fields of the quick view modal filled from a product card.
struct ModalFields {
    image: Option<HtmlImageElement>,
    category: Option<Element>,
    title: Option<Element>,
    price: Option<Element>,
    description: Option<Element>,
    category_link: Option<Element>,
}

impl ModalFields {
    fn fill_from(&self, card: &Element) {
        if let Some(image) = &self.image {
            let src = dom::first_in::<HtmlImageElement>(card, ".product-image img")
                .map(|img| img.src())
                .unwrap_or_default();
            image.set_src(&src);
        }
        let category = dom::text_in(card, ".product-category");
        let title = dom::text_in(card, ".product-title");
        let price = dom::text_in(card, ".product-price");
        let description = dom::text_in(card, ".product-description");
        let fields = [
            (&self.category, &category),
            (&self.title, &title),
            (&self.price, &price),
            (&self.description, &description),
            (&self.category_link, &category),
        ];
        for (field, text) in fields {
            if let Some(el) = field {
                el.set_text_content(Some(text.as_str()));
            }
        }
    }
}

/// The `#quick-view-modal` product preview with its quantity stepper.
pub struct QuickView {
    modal: HtmlElement,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for QuickView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuickView")
            .field("open", &self.modal.class_list().contains("active"))
            .finish_non_exhaustive()
    }
}

impl QuickView {
    /// Wires `.quick-view` buttons, the close controls and the stepper.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let doc = &cx.document;
        let modal: HtmlElement = dom::required(doc, "quick-view-modal")?;
        let fields = Rc::new(ModalFields {
            image: dom::optional(doc, "modal-product-image"),
            category: dom::optional(doc, "modal-category"),
            title: dom::optional(doc, "modal-title"),
            price: dom::optional(doc, "modal-price"),
            description: dom::optional(doc, "modal-description"),
            category_link: dom::optional(doc, "modal-cat-link"),
        });

        let mut listeners = Vec::new();
        for button in dom::all(doc, ".quick-view").unwrap_or_default() {
            let (fields, modal, doc) = (Rc::clone(&fields), modal.clone(), doc.clone());
            let source = button.clone();
            listeners.push(Listener::new(&button, "click", move |_: Event| {
                if let Some(card) = source.closest(".product-card").ok().flatten() {
                    fields.fill_from(&card);
                }
                set_class(&modal, "active", true);
                dom::lock_scroll(&doc, true);
            })?);
        }

        let close_targets = [
            dom::optional::<Element>(doc, "modal-close"),
            dom::first_in::<Element>(&modal, ".modal-overlay"),
        ];
        for target in close_targets.into_iter().flatten() {
            let (modal, doc) = (modal.clone(), doc.clone());
            listeners.push(Listener::new(&target, "click", move |_: Event| {
                set_class(&modal, "active", false);
                dom::lock_scroll(&doc, false);
            })?);
        }

        let minus = dom::first_in::<Element>(&modal, ".qty-btn.minus");
        let plus = dom::first_in::<Element>(&modal, ".qty-btn.plus");
        let input = dom::optional::<HtmlInputElement>(doc, "modal-quantity");
        if let (Some(minus), Some(plus), Some(input)) = (minus, plus, input) {
            let steps: [(Element, fn(Quantity) -> Quantity); 2] =
                [(minus, Quantity::decrement), (plus, Quantity::increment)];
            for (button, step) in steps {
                let input = input.clone();
                listeners.push(Listener::new(&button, "click", move |_: Event| {
                    let next = step(Quantity::parse(&input.value()));
                    input.set_value(&format!("{}", next.get()));
                })?);
            }
        }

        Ok(Self {
            modal,
            _listeners: listeners,
        })
    }
}

// ---------------------------------------------------------------------------
// Wishlist, cart, load more
// ---------------------------------------------------------------------------

/// Heart buttons (`.add-to-wishlist`) that swap their icon between outline
/// (`far`) and filled (`fas`).
pub struct WishlistButtons {
    wishlist: Rc<RefCell<Wishlist>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for WishlistButtons {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let len = self.wishlist.try_borrow().map(|w| w.len()).ok();
        f.debug_struct("WishlistButtons")
            .field("wished", &len)
            .finish_non_exhaustive()
    }
}

impl WishlistButtons {
    /// Wires every wishlist button; icons already filled start wished for.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let buttons = dom::all(&cx.document, ".add-to-wishlist")?;
        let wishlist = Rc::new(RefCell::new(Wishlist::new()));
        let mut listeners = Vec::with_capacity(buttons.len());
        for (i, button) in buttons.iter().enumerate() {
            let icon = dom::first_in::<Element>(button, "i");
            if icon.as_ref().is_some_and(|el| el.class_list().contains("fas")) {
                wishlist.borrow_mut().preload(i);
            }
            let (wishlist, notifier) = (Rc::clone(&wishlist), cx.notifier.clone());
            listeners.push(Listener::new(button, "click", move |_: Event| {
                let Ok(mut wishlist) = wishlist.try_borrow_mut() else {
                    return;
                };
                let added = wishlist.toggle(i);
                if let Some(icon) = &icon {
                    set_class(icon, "fas", added);
                    set_class(icon, "far", !added);
                }
                notifier.success(Wishlist::message(added));
            })?);
        }
        Ok(Self {
            wishlist,
            _listeners: listeners,
        })
    }
}

/// `.btn-add-cart` buttons feeding the `.cart-count` badge.
pub struct CartButtons {
    badge: Rc<RefCell<CartBadge>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for CartButtons {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let count = self.badge.try_borrow().map(|b| b.count()).ok();
        f.debug_struct("CartButtons")
            .field("count", &count)
            .finish_non_exhaustive()
    }
}

impl CartButtons {
    /// Wires every add-to-cart button.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let buttons = dom::all(&cx.document, ".btn-add-cart")?;
        let counter = cx.document.query_selector(".cart-count")?;
        let badge = Rc::new(RefCell::new(CartBadge::from_text(
            &counter
                .as_ref()
                .and_then(|c| c.text_content())
                .unwrap_or_default(),
        )));

        let mut listeners = Vec::with_capacity(buttons.len());
        for button in &buttons {
            let title = button
                .closest(".product-card")
                .ok()
                .flatten()
                .map(|card| dom::text_in(&card, ".product-title"))
                .unwrap_or_default();
            let (badge, counter, notifier) =
                (Rc::clone(&badge), counter.clone(), cx.notifier.clone());
            listeners.push(Listener::new(button, "click", move |_: Event| {
                let Ok(mut badge) = badge.try_borrow_mut() else {
                    return;
                };
                let message = badge.add(&title);
                if let Some(counter) = &counter {
                    counter.set_text_content(Some(format!("{}", badge.count()).as_str()));
                }
                notifier.success(&message);
            })?);
        }
        Ok(Self {
            badge,
            _listeners: listeners,
        })
    }
}

/// The `#load-more` button; there is never anything more to load.
pub struct LoadMore {
    pending: Rc<RefCell<Option<Timeout>>>,
    _listener: Listener,
}

impl core::fmt::Debug for LoadMore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let loading = self.pending.try_borrow().map(|p| p.is_some()).ok();
        f.debug_struct("LoadMore")
            .field("loading", &loading)
            .finish_non_exhaustive()
    }
}

impl LoadMore {
    /// Wires the button to a simulated fetch.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let button: HtmlElement = dom::required(&cx.document, "load-more")?;
        let pending = Rc::new(RefCell::new(None));
        let delay = cx.config.load_more;
        let (slot, notifier, target) = (Rc::clone(&pending), cx.notifier.clone(), button.clone());
        let listener = Listener::new(&button, "click", move |_: Event| {
            target.set_text_content(Some(LOADING_LABEL));
            let (notifier, target) = (notifier.clone(), target.clone());
            let timeout = Timeout::new(delay, move || {
                notifier.success(ALL_LOADED);
                set_style(&target, "display", "none");
            });
            if let Ok(mut slot) = slot.try_borrow_mut() {
                *slot = Some(timeout);
            }
        })?;
        Ok(Self {
            pending,
            _listener: listener,
        })
    }
}
