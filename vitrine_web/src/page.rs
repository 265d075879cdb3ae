// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level wiring.
//!
//! [`Page::init`] tries every controller against the current document. A
//! controller whose elements are absent is skipped and recorded; nothing on
//! a page depends on another controller being present.

use alloc::vec::Vec;

use web_sys::{Document, Window};

use vitrine_core::config::SiteConfig;
use vitrine_core::trace::{Component, InitEvent, InitStatus};

use crate::diagnostics::Diagnostics;
use crate::dom::{self, InitError};
use crate::gallery::{BeforeAfter, GalleryFilter, Lightbox};
use crate::notify::Notifier;
use crate::products::{
    CartButtons, LoadMore, ProductFilters, ProductSort, QuickView, WishlistButtons,
};
use crate::site::{
    BackToTop, CatalogDownload, ConsultationForm, ContactForm, Faq, MobileMenu, Navbar, Newsletter,
    ScrollReveal, SmoothScroll, Testimonials, TrustCounters,
};

/// What every controller needs to attach itself.
#[derive(Clone, Debug)]
pub struct Context {
    /// The browser window.
    pub window: Window,
    /// The page's document.
    pub document: Document,
    /// Delays and thresholds.
    pub config: SiteConfig,
    /// Shared notification overlays.
    pub notifier: Notifier,
    /// Shared trace sink.
    pub diagnostics: Diagnostics,
}

impl Context {
    /// Builds a context for the current window.
    pub fn new(config: SiteConfig, diagnostics: Diagnostics) -> Result<Self, InitError> {
        let window = web_sys::window().ok_or(InitError::Missing("window"))?;
        let document = dom::document()?;
        let notifier = Notifier::new(document.clone(), config.notify, diagnostics.clone())?;
        Ok(Self {
            window,
            document,
            config,
            notifier,
            diagnostics,
        })
    }
}

/// Records init outcomes and reports them to the trace sink.
struct InitLog<'a> {
    statuses: Vec<(Component, InitStatus)>,
    diagnostics: &'a Diagnostics,
}

impl InitLog<'_> {
    fn mount<T>(&mut self, component: Component, result: Result<T, InitError>) -> Option<T> {
        let status = match &result {
            Ok(_) => InitStatus::Active,
            Err(err) => err.status(),
        };
        self.statuses.push((component, status));
        self.diagnostics.emit(|t| t.init(&InitEvent { component, status }));
        result.ok()
    }
}

/// Every controller attached to the page.
///
/// Dropping a `Page` detaches all listeners and cancels all timers, so keep
/// it alive for as long as the page is shown.
#[derive(Debug)]
pub struct Page {
    context: Context,
    statuses: Vec<(Component, InitStatus)>,

    _navbar: Option<Navbar>,
    _mobile_menu: Option<MobileMenu>,
    _testimonials: Option<Testimonials>,
    _back_to_top: Option<BackToTop>,
    _newsletter: Option<Newsletter>,
    _contact_form: Option<ContactForm>,
    _consultation_form: Option<ConsultationForm>,
    _faq: Option<Faq>,
    _scroll_reveal: Option<ScrollReveal>,
    _trust_counters: Option<TrustCounters>,
    _catalog_download: Option<CatalogDownload>,
    _smooth_scroll: Option<SmoothScroll>,

    _gallery_filter: Option<GalleryFilter>,
    _lightbox: Option<Lightbox>,
    before_after: Option<BeforeAfter>,

    _product_filters: Option<ProductFilters>,
    _product_sort: Option<ProductSort>,
    _quick_view: Option<QuickView>,
    _wishlist: Option<WishlistButtons>,
    _cart: Option<CartButtons>,
    _load_more: Option<LoadMore>,
}

impl Page {
    /// Attaches every controller whose elements exist.
    ///
    /// Fails only if there is no window or document.
    pub fn init(config: SiteConfig, diagnostics: Diagnostics) -> Result<Self, InitError> {
        let cx = Context::new(config, diagnostics)?;
        let mut log = InitLog {
            statuses: Vec::new(),
            diagnostics: &cx.diagnostics,
        };

        let navbar = log.mount(Component::Navbar, Navbar::init(&cx));
        let mobile_menu = log.mount(Component::MobileMenu, MobileMenu::init(&cx));
        let testimonials = log.mount(Component::Testimonials, Testimonials::init(&cx));
        let back_to_top = log.mount(Component::BackToTop, BackToTop::init(&cx));
        let newsletter = log.mount(Component::Newsletter, Newsletter::init(&cx));
        let contact_form = log.mount(Component::ContactForm, ContactForm::init(&cx));
        let consultation_form =
            log.mount(Component::ConsultationForm, ConsultationForm::init(&cx));
        let faq = log.mount(Component::Faq, Faq::init(&cx));
        let scroll_reveal = log.mount(Component::ScrollReveal, ScrollReveal::init(&cx));
        let trust_counters = log.mount(Component::TrustCounters, TrustCounters::init(&cx));
        let catalog_download = log.mount(Component::CatalogDownload, CatalogDownload::init(&cx));
        let smooth_scroll = log.mount(Component::SmoothScroll, SmoothScroll::init(&cx));

        let gallery_filter = log.mount(Component::GalleryFilter, GalleryFilter::init(&cx));
        let lightbox = log.mount(Component::Lightbox, Lightbox::init(&cx));
        let before_after = log.mount(Component::BeforeAfter, BeforeAfter::init(&cx));

        let product_filters = log.mount(Component::ProductFilter, ProductFilters::init(&cx));
        let product_sort = log.mount(Component::ProductSort, ProductSort::init(&cx));
        let quick_view = log.mount(Component::QuickView, QuickView::init(&cx));
        let wishlist = log.mount(Component::Wishlist, WishlistButtons::init(&cx));
        let cart = log.mount(Component::Cart, CartButtons::init(&cx));
        let load_more = log.mount(Component::LoadMore, LoadMore::init(&cx));

        let statuses = log.statuses;
        Ok(Self {
            context: cx,
            statuses,
            _navbar: navbar,
            _mobile_menu: mobile_menu,
            _testimonials: testimonials,
            _back_to_top: back_to_top,
            _newsletter: newsletter,
            _contact_form: contact_form,
            _consultation_form: consultation_form,
            _faq: faq,
            _scroll_reveal: scroll_reveal,
            _trust_counters: trust_counters,
            _catalog_download: catalog_download,
            _smooth_scroll: smooth_scroll,
            _gallery_filter: gallery_filter,
            _lightbox: lightbox,
            before_after,
            _product_filters: product_filters,
            _product_sort: product_sort,
            _quick_view: quick_view,
            _wishlist: wishlist,
            _cart: cart,
            _load_more: load_more,
        })
    }

    /// How each controller's initialization ended, in attach order.
    #[must_use]
    pub fn statuses(&self) -> &[(Component, InitStatus)] {
        &self.statuses
    }

    /// Controllers that attached.
    pub fn active(&self) -> impl Iterator<Item = Component> + '_ {
        self.statuses
            .iter()
            .filter(|(_, s)| *s == InitStatus::Active)
            .map(|(c, _)| *c)
    }

    /// The shared notifier, for application code that wants its own overlays.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.context.notifier
    }

    /// The configuration the page was built with.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.context.config
    }

    /// Before/after slider positions, if the page has any.
    #[must_use]
    pub fn comparison_positions(&self) -> Vec<f64> {
        self.before_after
            .as_ref()
            .map(BeforeAfter::positions)
            .unwrap_or_default()
    }
}
