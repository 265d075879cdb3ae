// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page controllers.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! controllers call as they initialize and react to input. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies (one branch per call).

use crate::form::FormError;
use crate::notify::{NotificationId, NotificationKind};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The page controller an event comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// Scroll-linked navbar styling.
    Navbar,
    /// Mobile navigation drawer.
    MobileMenu,
    /// Testimonial carousel.
    Testimonials,
    /// Back-to-top button.
    BackToTop,
    /// Newsletter signup form.
    Newsletter,
    /// Contact form.
    ContactForm,
    /// Consultation booking form.
    ConsultationForm,
    /// FAQ accordion.
    Faq,
    /// Reveal-on-scroll animation.
    ScrollReveal,
    /// Trust figure count-up.
    TrustCounters,
    /// Catalog download button.
    CatalogDownload,
    /// In-page anchor smooth scrolling.
    SmoothScroll,
    /// Gallery category filter.
    GalleryFilter,
    /// Gallery lightbox.
    Lightbox,
    /// Before/after comparison sliders.
    BeforeAfter,
    /// Product category and color filters.
    ProductFilter,
    /// Product sort select.
    ProductSort,
    /// Quick view modal.
    QuickView,
    /// Wishlist buttons.
    Wishlist,
    /// Add-to-cart buttons.
    Cart,
    /// Load-more button.
    LoadMore,
    /// Notification overlays.
    Notifications,
}

impl Component {
    /// Short lowercase label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::MobileMenu => "mobile-menu",
            Self::Testimonials => "testimonials",
            Self::BackToTop => "back-to-top",
            Self::Newsletter => "newsletter",
            Self::ContactForm => "contact-form",
            Self::ConsultationForm => "consultation-form",
            Self::Faq => "faq",
            Self::ScrollReveal => "scroll-reveal",
            Self::TrustCounters => "trust-counters",
            Self::CatalogDownload => "catalog-download",
            Self::SmoothScroll => "smooth-scroll",
            Self::GalleryFilter => "gallery-filter",
            Self::Lightbox => "lightbox",
            Self::BeforeAfter => "before-after",
            Self::ProductFilter => "product-filter",
            Self::ProductSort => "product-sort",
            Self::QuickView => "quick-view",
            Self::Wishlist => "wishlist",
            Self::Cart => "cart",
            Self::LoadMore => "load-more",
            Self::Notifications => "notifications",
        }
    }
}

/// How a controller's initialization ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InitStatus {
    /// Listeners are attached.
    Active,
    /// A required element is absent (selector or id given).
    Missing(&'static str),
    /// A required element list is empty (selector given).
    Empty(&'static str),
    /// A DOM call failed while wiring.
    Failed,
}

/// Which input path moved a comparison slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// The range input.
    Range,
    /// A mouse drag.
    Pointer,
    /// A touch move.
    Touch,
}

/// Which lifecycle step a notification reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationStage {
    /// Put on screen.
    Shown,
    /// Exit transition started.
    Exiting,
    /// Taken off screen.
    Removed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per controller at page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitEvent {
    /// The controller.
    pub component: Component,
    /// Result of wiring it.
    pub status: InitStatus,
}

/// Emitted when a cycler moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleEvent {
    /// The controller.
    pub component: Component,
    /// Previously active index.
    pub from: usize,
    /// Newly active index.
    pub to: usize,
    /// Number of items cycled over.
    pub len: usize,
}

/// Emitted after a filter change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterEvent<'a> {
    /// The controller.
    pub component: Component,
    /// Dimension name.
    pub dimension: &'a str,
    /// Raw selected value (`"all"` for the sentinel).
    pub value: &'a str,
    /// Items whose visibility changed.
    pub changed: usize,
    /// Items matching every dimension.
    pub visible: usize,
}

/// Emitted at each notification lifecycle step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationEvent<'a> {
    /// Notification id.
    pub id: NotificationId,
    /// Lifecycle step.
    pub stage: NotificationStage,
    /// Styling class, known only when shown.
    pub kind: Option<NotificationKind>,
    /// Message text, known only when shown.
    pub message: Option<&'a str>,
}

/// Emitted when a comparison slider receives input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonEvent {
    /// Index of the slider on the page.
    pub slider: usize,
    /// Input path.
    pub source: InputSource,
    /// Requested position in percent.
    pub requested: f64,
    /// Whether the value was in range and applied.
    pub accepted: bool,
}

/// Emitted when a form is submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormEvent {
    /// The form's controller.
    pub component: Component,
    /// Validation result.
    pub result: Result<(), FormError>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a controller finishes (or skips) initialization.
    fn on_init(&mut self, e: &InitEvent) {
        _ = e;
    }

    /// Called when a cycler moves.
    fn on_cycle(&mut self, e: &CycleEvent) {
        _ = e;
    }

    /// Called after a filter change.
    fn on_filter(&mut self, e: &FilterEvent<'_>) {
        _ = e;
    }

    /// Called at each notification lifecycle step.
    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        _ = e;
    }

    /// Called when a comparison slider receives input.
    fn on_comparison(&mut self, e: &ComparisonEvent) {
        _ = e;
    }

    /// Called when a form is submitted.
    fn on_form(&mut self, e: &FormEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

/// Generates a `Tracer` method that forwards one event type.
macro_rules! forward {
    ($(#[$doc:meta])* $name:ident => $method:ident($ty:ty)) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$ty) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    forward!(
        /// Emits an [`InitEvent`].
        init => on_init(InitEvent)
    );
    forward!(
        /// Emits a [`CycleEvent`].
        cycle => on_cycle(CycleEvent)
    );
    forward!(
        /// Emits a [`FilterEvent`].
        filter => on_filter(FilterEvent<'_>)
    );
    forward!(
        /// Emits a [`NotificationEvent`].
        notification => on_notification(NotificationEvent<'_>)
    );
    forward!(
        /// Emits a [`ComparisonEvent`].
        comparison => on_comparison(ComparisonEvent)
    );
    forward!(
        /// Emits a [`FormEvent`].
        form => on_form(FormEvent)
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn skipped() -> InitEvent {
        InitEvent {
            component: Component::Lightbox,
            status: InitStatus::Missing("#lightbox"),
        }
    }

    #[test]
    fn component_labels() {
        assert_eq!(Component::Testimonials.as_str(), "testimonials");
        assert_eq!(Component::BeforeAfter.as_str(), "before-after");
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_init(&skipped());
        sink.on_cycle(&CycleEvent {
            component: Component::Testimonials,
            from: 0,
            to: 1,
            len: 4,
        });
        sink.on_form(&FormEvent {
            component: Component::Newsletter,
            result: Err(FormError::InvalidEmail),
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.init(&skipped());
        tracer.filter(&FilterEvent {
            component: Component::GalleryFilter,
            dimension: "category",
            value: "all",
            changed: 0,
            visible: 3,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            skipped: Vec<Component>,
        }
        impl TraceSink for RecordingSink {
            fn on_init(&mut self, e: &InitEvent) {
                if e.status != InitStatus::Active {
                    self.skipped.push(e.component);
                }
            }
        }

        let mut sink = RecordingSink {
            skipped: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.init(&skipped());
        tracer.init(&InitEvent {
            component: Component::Faq,
            status: InitStatus::Active,
        });
        drop(tracer);
        assert_eq!(sink.skipped, [Component::Lightbox]);
    }
}
