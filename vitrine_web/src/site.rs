// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controllers shared by every storefront page.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use web_sys::{
    Element, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use vitrine_core::accordion::Accordion;
use vitrine_core::backend::CyclerPresenter;
use vitrine_core::counter::{CountFrame, CountUp};
use vitrine_core::cycler::{Cycler, Transition};
use vitrine_core::form::{
    CATALOG_OK, CONSULTATION_OK, CONTACT_OK, ContactForm as ContactFields, FormError,
    NEWSLETTER_OK, validate_newsletter,
};
use vitrine_core::time::Duration;
use vitrine_core::toggle::{ScrollThreshold, Toggle};
use vitrine_core::trace::{Component, CycleEvent, FormEvent};

use crate::diagnostics::Diagnostics;
use crate::dom::{self, InitError, set_class, set_style};
use crate::listener::{Listener, Observer};
use crate::page::Context;
use crate::timer::{Interval, Timeout};

/// Elements faded in as they scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".category-card, .collection-item, .feature-item, .product-card, .gallery-item, .service-card";

fn report_form(diagnostics: &Diagnostics, component: Component, result: Result<(), FormError>) {
    diagnostics.emit(|t| t.form(&FormEvent { component, result }));
}

// ---------------------------------------------------------------------------
// Scroll-linked chrome
// ---------------------------------------------------------------------------

/// Toggles `class` on `el` whenever the scroll offset crosses `threshold`.
fn scroll_class(
    window: &Window,
    el: HtmlElement,
    class: &'static str,
    threshold: f64,
) -> Result<Listener, InitError> {
    let mut state = ScrollThreshold::new(threshold);
    if let Some(active) = state.update(dom::scroll_y()) {
        set_class(&el, class, active);
    }
    Listener::new(window, "scroll", move |_: Event| {
        if let Some(active) = state.update(dom::scroll_y()) {
            set_class(&el, class, active);
        }
    })
    .map_err(InitError::from)
}

/// Adds `scrolled` to `#navbar` once the page is scrolled.
#[derive(Debug)]
pub struct Navbar {
    _listener: Listener,
}

impl Navbar {
    /// Watches the window scroll offset.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let navbar: HtmlElement = dom::required(&cx.document, "navbar")?;
        Ok(Self {
            _listener: scroll_class(&cx.window, navbar, "scrolled", cx.config.navbar_scroll)?,
        })
    }
}

/// `#back-to-top`: shown past a scroll offset, scrolls smoothly to the top.
#[derive(Debug)]
pub struct BackToTop {
    _listeners: [Listener; 2],
}

impl BackToTop {
    /// Watches the scroll offset and wires the click.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let button: HtmlElement = dom::required(&cx.document, "back-to-top")?;
        let window = cx.window.clone();
        let click = Listener::new(&button, "click", move |_: Event| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
        let scroll = scroll_class(&cx.window, button, "show", cx.config.back_to_top_scroll)?;
        Ok(Self {
            _listeners: [click, scroll],
        })
    }
}

/// The mobile navigation drawer.
pub struct MobileMenu {
    state: Rc<RefCell<Toggle>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for MobileMenu {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let open = self.state.try_borrow().map(|t| t.is_open()).ok();
        f.debug_struct("MobileMenu")
            .field("open", &open)
            .finish_non_exhaustive()
    }
}

impl MobileMenu {
    /// Wires `#menuToggle`, `#menuOverlay` and every drawer link.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let doc = &cx.document;
        let toggle: HtmlElement = dom::required(doc, "menuToggle")?;
        let nav: HtmlElement = dom::required(doc, "mobileNav")?;
        let overlay: HtmlElement = dom::required(doc, "menuOverlay")?;
        let links = dom::all(doc, ".mobile-nav-links a").unwrap_or_default();

        let state = Rc::new(RefCell::new(Toggle::new()));
        let parts = [toggle.clone(), nav, overlay.clone()];
        let mut listeners = Vec::with_capacity(links.len() + 2);
        for target in [toggle, overlay].iter().chain(&links) {
            let (state, parts, doc) = (Rc::clone(&state), parts.clone(), doc.clone());
            listeners.push(Listener::new(target, "click", move |_: Event| {
                let Ok(mut state) = state.try_borrow_mut() else {
                    return;
                };
                let open = state.toggle();
                for part in &parts {
                    set_class(part, "active", open);
                }
                dom::lock_scroll(&doc, open);
            })?);
        }
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }
}

/// Smooth scrolling for in-page `#anchor` links.
#[derive(Debug)]
pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

impl SmoothScroll {
    /// Wires every `a[href^="#"]`.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let anchors = dom::all(&cx.document, "a[href^=\"#\"]")?;
        let mut listeners = Vec::with_capacity(anchors.len());
        for anchor in &anchors {
            let (source, doc) = (anchor.clone(), cx.document.clone());
            listeners.push(Listener::new(anchor, "click", move |e: Event| {
                let Some(href) = source.get_attribute("href") else {
                    return;
                };
                if href == "#" {
                    return;
                }
                // An id that is not a valid selector just falls through.
                if let Ok(Some(target)) = doc.query_selector(&href) {
                    e.prevent_default();
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            })?);
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

struct Carousel<'a> {
    wrapper: &'a HtmlElement,
    dots: &'a [HtmlElement],
}

impl CyclerPresenter for Carousel<'_> {
    fn show(&mut self, transition: Transition) {
        set_style(
            self.wrapper,
            "transform",
            &format!("translateX(-{}%)", transition.to * 100),
        );
        for (i, dot) in self.dots.iter().enumerate() {
            set_class(dot, "active", i == transition.to);
        }
    }
}

struct TestimonialState {
    cycler: Cycler<HtmlElement>,
    wrapper: HtmlElement,
    dots: Vec<HtmlElement>,
    diagnostics: Diagnostics,
}

impl TestimonialState {
    fn go(&mut self, step: impl FnOnce(&mut Cycler<HtmlElement>) -> Transition) {
        let transition = step(&mut self.cycler);
        Carousel {
            wrapper: &self.wrapper,
            dots: &self.dots,
        }
        .show(transition);
        let len = self.cycler.len();
        self.diagnostics.emit(|t| {
            t.cycle(&CycleEvent {
                component: Component::Testimonials,
                from: transition.from,
                to: transition.to,
                len,
            });
        });
    }
}

/// The testimonial carousel: dots, prev/next buttons and autoplay.
pub struct Testimonials {
    state: Rc<RefCell<TestimonialState>>,
    _autoplay: Interval,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for Testimonials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let index = self.state.try_borrow().map(|s| s.cycler.index()).ok();
        f.debug_struct("Testimonials")
            .field("index", &index)
            .finish_non_exhaustive()
    }
}

impl Testimonials {
    /// Builds one dot per `.testimonial-card` and starts autoplay.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let doc = &cx.document;
        let wrapper: HtmlElement = dom::required(doc, "testimonials-wrapper")?;
        let dots_container: HtmlElement = dom::required(doc, "testimonial-dots")?;
        let cards = dom::all_in(&wrapper, ".testimonial-card");
        let cycler = Cycler::new(cards).ok_or(InitError::Empty(".testimonial-card"))?;

        let mut dots = Vec::with_capacity(cycler.len());
        for i in 0..cycler.len() {
            let dot: HtmlElement = doc.create_element("div")?.unchecked_into();
            dot.set_class_name(if i == 0 { "dot active" } else { "dot" });
            dots_container.append_child(&dot)?;
            dots.push(dot);
        }

        let state = Rc::new(RefCell::new(TestimonialState {
            cycler,
            wrapper,
            dots: dots.clone(),
            diagnostics: cx.diagnostics.clone(),
        }));

        let mut listeners = Vec::new();
        for (i, dot) in dots.iter().enumerate() {
            let state = Rc::clone(&state);
            listeners.push(Listener::new(dot, "click", move |_: Event| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.go(|c| c.go_to(i));
                }
            })?);
        }
        let steps: [(&str, fn(&mut Cycler<HtmlElement>) -> Transition); 2] = [
            ("prev-testimonial", Cycler::previous),
            ("next-testimonial", Cycler::next),
        ];
        for (id, step) in steps {
            if let Some(button) = dom::optional::<Element>(doc, id) {
                let state = Rc::clone(&state);
                listeners.push(Listener::new(&button, "click", move |_: Event| {
                    if let Ok(mut state) = state.try_borrow_mut() {
                        state.go(step);
                    }
                })?);
            }
        }

        let weak = Rc::downgrade(&state);
        let autoplay = Interval::new(cx.config.autoplay, move || {
            if let Some(state) = weak.upgrade()
                && let Ok(mut state) = state.try_borrow_mut()
            {
                state.go(Cycler::next);
            }
        });

        Ok(Self {
            state,
            _autoplay: autoplay,
            _listeners: listeners,
        })
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// `#newsletter-form`: a single email field.
#[derive(Debug)]
pub struct Newsletter {
    _listener: Listener,
}

impl Newsletter {
    /// Wires the submit handler.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let form: HtmlFormElement = dom::required(&cx.document, "newsletter-form")?;
        let (source, notifier, diagnostics) =
            (form.clone(), cx.notifier.clone(), cx.diagnostics.clone());
        let listener = Listener::new(&form, "submit", move |e: Event| {
            e.prevent_default();
            let email = dom::first_in::<HtmlInputElement>(&source, "input[type=\"email\"]")
                .map(|input| input.value())
                .unwrap_or_default();
            let result = validate_newsletter(&email);
            match result {
                Ok(()) => {
                    notifier.success(NEWSLETTER_OK);
                    source.reset();
                }
                Err(err) => {
                    notifier.error(&err.to_string());
                }
            }
            report_form(&diagnostics, Component::Newsletter, result);
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}

/// Inline status line under the contact form.
struct FormMessage {
    el: Option<HtmlElement>,
    lifetime: Duration,
    reset: Option<Timeout>,
}

impl FormMessage {
    fn show(&mut self, text: &str, class: &str) {
        let Some(el) = &self.el else {
            return;
        };
        el.set_text_content(Some(text));
        el.set_class_name(&format!("form-message {class}"));
        let el = el.clone();
        self.reset = Some(Timeout::new(self.lifetime, move || {
            el.set_class_name("form-message");
        }));
    }
}

struct ContactState {
    message: FormMessage,
    submit: Option<Timeout>,
}

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

/// `#contact-form`: five required fields and a simulated send.
pub struct ContactForm {
    state: Rc<RefCell<ContactState>>,
    _listener: Listener,
}

impl core::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sending = self.state.try_borrow().map(|s| s.submit.is_some()).ok();
        f.debug_struct("ContactForm")
            .field("sending", &sending)
            .finish_non_exhaustive()
    }
}

impl ContactForm {
    /// Wires the submit handler; `#form-message` is optional.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let form: HtmlFormElement = dom::required(&cx.document, "contact-form")?;
        let state = Rc::new(RefCell::new(ContactState {
            message: FormMessage {
                el: dom::optional(&cx.document, "form-message"),
                lifetime: cx.config.form_message,
                reset: None,
            },
            submit: None,
        }));

        let (source, shared, diagnostics) =
            (form.clone(), Rc::clone(&state), cx.diagnostics.clone());
        let delay = cx.config.simulated_submit;
        let listener = Listener::new(&form, "submit", move |e: Event| {
            e.prevent_default();
            let Ok(data) = FormData::new_with_form(&source) else {
                return;
            };
            let [name, email, service, subject, message] =
                ContactFields::FIELDS.map(|name| field(&data, name));
            let result = ContactFields {
                name: &name,
                email: &email,
                service: &service,
                subject: &subject,
                message: &message,
            }
            .validate();
            report_form(&diagnostics, Component::ContactForm, result);

            let Ok(mut state) = shared.try_borrow_mut() else {
                return;
            };
            if let Err(err) = result {
                state.message.show(&err.to_string(), "error");
                return;
            }
            let (weak, form): (Weak<RefCell<ContactState>>, HtmlFormElement) =
                (Rc::downgrade(&shared), source.clone());
            state.submit = Some(Timeout::new(delay, move || {
                if let Some(state) = weak.upgrade()
                    && let Ok(mut state) = state.try_borrow_mut()
                {
                    state.message.show(CONTACT_OK, "success");
                }
                form.reset();
            }));
        })?;
        Ok(Self {
            state,
            _listener: listener,
        })
    }
}

/// `#consultation-form`: always accepted.
#[derive(Debug)]
pub struct ConsultationForm {
    _listener: Listener,
}

impl ConsultationForm {
    /// Wires the submit handler.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let form: HtmlFormElement = dom::required(&cx.document, "consultation-form")?;
        let (source, notifier, diagnostics) =
            (form.clone(), cx.notifier.clone(), cx.diagnostics.clone());
        let listener = Listener::new(&form, "submit", move |e: Event| {
            e.prevent_default();
            notifier.success(CONSULTATION_OK);
            source.reset();
            report_form(&diagnostics, Component::ConsultationForm, Ok(()));
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}

/// `#download-catalog`: announces a download that never happens.
#[derive(Debug)]
pub struct CatalogDownload {
    _listener: Listener,
}

impl CatalogDownload {
    /// Wires the button.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let button: HtmlElement = dom::required(&cx.document, "download-catalog")?;
        let notifier = cx.notifier.clone();
        let listener = Listener::new(&button, "click", move |e: Event| {
            e.prevent_default();
            notifier.success(CATALOG_OK);
        })?;
        Ok(Self {
            _listener: listener,
        })
    }
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

/// The `.faq-item` accordion.
pub struct Faq {
    state: Rc<RefCell<Accordion>>,
    _listeners: Vec<Listener>,
}

impl core::fmt::Debug for Faq {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let open = self.state.try_borrow().map(|a| a.open()).ok();
        f.debug_struct("Faq").field("open", &open).finish_non_exhaustive()
    }
}

impl Faq {
    /// Wires each item's `.faq-question`; items without one stay closed.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let items = dom::all(&cx.document, ".faq-item")?;
        let state = Rc::new(RefCell::new(Accordion::new(items.len())));
        let mut listeners = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let Some(question) = dom::first_in::<Element>(item, ".faq-question") else {
                continue;
            };
            let (state, items) = (Rc::clone(&state), items.clone());
            listeners.push(Listener::new(&question, "click", move |_: Event| {
                let Ok(mut state) = state.try_borrow_mut() else {
                    return;
                };
                let open = state.toggle(i);
                for (j, item) in items.iter().enumerate() {
                    set_class(item, "active", open == Some(j));
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
// Scroll reveal and counters
// ---------------------------------------------------------------------------

/// Fades content up into place the first time it scrolls into view.
#[derive(Debug)]
pub struct ScrollReveal {
    _observer: Observer,
}

impl ScrollReveal {
    /// Hides every [`REVEAL_SELECTOR`] element and starts observing.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let elements = dom::all(&cx.document, REVEAL_SELECTOR)?;
        let observer = Observer::with_options(
            cx.config.reveal_threshold,
            cx.config.reveal_root_margin,
            |entry, observer| {
                if !entry.is_intersecting() {
                    return;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<HtmlElement>() {
                    set_style(&el, "opacity", "1");
                    set_style(&el, "transform", "translateY(0)");
                }
            },
        )?;
        for el in &elements {
            set_style(el, "opacity", "0");
            set_style(el, "transform", "translateY(30px)");
            set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
            observer.observe(el);
        }
        Ok(Self {
            _observer: observer,
        })
    }
}

type Running = Rc<RefCell<BTreeMap<usize, Interval>>>;

/// Starts the count-up for counter `index`; the interval drops itself when
/// the target is reached.
fn start_counter(
    running: &Running,
    index: usize,
    el: HtmlElement,
    mut count: CountUp,
    frame: Duration,
) {
    let weak = Rc::downgrade(running);
    let interval = Interval::new(frame, move || {
        let step = count.step();
        el.set_text_content(Some(format!("{}", step.value()).as_str()));
        if let CountFrame::Done(_) = step
            && let Some(running) = weak.upgrade()
            && let Ok(mut running) = running.try_borrow_mut()
        {
            running.remove(&index);
        }
    });
    if let Ok(mut running) = running.try_borrow_mut() {
        running.insert(index, interval);
    }
}

/// `.trust-number` figures that count up from zero once visible.
pub struct TrustCounters {
    running: Running,
    _observer: Observer,
}

impl core::fmt::Debug for TrustCounters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let running = self.running.try_borrow().map(|r| r.len()).ok();
        f.debug_struct("TrustCounters")
            .field("running", &running)
            .finish_non_exhaustive()
    }
}

impl TrustCounters {
    /// Observes every counter; each animates once.
    pub fn init(cx: &Context) -> Result<Self, InitError> {
        let counters = dom::all(&cx.document, ".trust-number")?;
        let running: Running = Rc::default();
        let (duration, frame) = (cx.config.counter_duration, cx.config.counter_frame);

        let (shared, elements) = (Rc::clone(&running), counters.clone());
        let observer = Observer::new(move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            observer.unobserve(&target);
            let Some(index) = elements.iter().position(|el| **el == target) else {
                return;
            };
            let el = elements[index].clone();
            // Counters without a readable target keep their markup text.
            let Some(goal) = el
                .get_attribute("data-count")
                .and_then(|raw| CountUp::parse_target(&raw))
            else {
                return;
            };
            start_counter(&shared, index, el, CountUp::new(goal, duration, frame), frame);
        })?;
        for el in &counters {
            observer.observe(el);
        }
        Ok(Self {
            running,
            _observer: observer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::REVEAL_SELECTOR;

    #[test]
    fn reveal_selector_lists_every_card_kind() {
        let kinds: alloc::vec::Vec<&str> = REVEAL_SELECTOR.split(", ").collect();
        assert_eq!(kinds.len(), 6, "six card kinds are revealed");
        assert!(kinds.contains(&".gallery-item"), "gallery cards are revealed");
    }
}
