// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state for storefront pages.
//!
//! `vitrine_core` holds the state behind a furniture storefront's interactive
//! widgets: carousels, filters, comparison sliders, notifications and forms.
//! It is `no_std` compatible (with `alloc`) and never touches a document; the
//! browser glue lives in `vitrine_web`.
//!
//! # Architecture
//!
//! Every widget follows the same loop:
//!
//! ```text
//!   DOM event (click, input, scroll, timer)
//!       │
//!       ▼
//!   state method ──► change description ──► Presenter
//!   (Cycler::next)   (Transition)           (CyclerPresenter::show)
//!       │
//!       ▼
//!   Tracer ──► TraceSink
//! ```
//!
//! **[`cycler`]**: Modular index over a fixed list (lightbox, testimonials).
//! Movement yields a [`Transition`](cycler::Transition).
//!
//! **[`filter`]**: Multi-dimension visibility filtering with hide and dim
//! policies. Changes yield a [`FilterOutcome`](filter::FilterOutcome) listing
//! only the items that changed.
//!
//! **[`comparison`]**: Before/after slider position with range rejection.
//!
//! **[`notify`]**: Timed two-phase notification overlays.
//!
//! **[`form`]**: Email and required-field validation with the storefront's
//! user-facing messages.
//!
//! **[`accordion`]**, **[`toggle`]**, **[`counter`]**, **[`sort`]**,
//! **[`catalog`]**: the smaller widgets (FAQ, open/closed and scroll-threshold
//! flags, count-up animation, product ordering, wishlist and cart).
//!
//! **[`backend`]**: Presenter traits that integrations implement.
//!
//! **[`config`]**: [`SiteConfig`](config::SiteConfig) with every delay and
//! threshold.
//!
//! **[`time`]**: Millisecond [`HostTime`](time::HostTime) and
//! [`Duration`](time::Duration).
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod accordion;
pub mod backend;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod counter;
pub mod cycler;
pub mod filter;
pub mod form;
pub mod notify;
pub mod sort;
pub mod time;
pub mod toggle;
pub mod trace;
