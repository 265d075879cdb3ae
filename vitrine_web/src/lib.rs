// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings for vitrine page controllers.
//!
//! This crate wires the state machines in [`vitrine_core`] to the DOM:
//!
//! - [`Page`]: attaches every controller whose markup is present
//! - [`Notifier`]: success/error overlays driven by a notification board
//! - [`Timeout`], [`Interval`], [`Listener`], [`Observer`]: handles that
//!   cancel or detach what they registered when dropped
//! - [`Diagnostics`] and [`ConsoleSink`]: trace events to the browser console
//!
//! Controllers live in [`site`], [`gallery`] and [`products`]. Each one
//! holds its own state behind an `Rc` shared only with its own listeners.

#![no_std]

extern crate alloc;

mod listener;
mod timer;

pub mod diagnostics;
pub mod dom;
pub mod gallery;
pub mod notify;
pub mod page;
pub mod products;
pub mod site;

pub use diagnostics::{ConsoleSink, Diagnostics};
pub use dom::InitError;
pub use listener::{Listener, Observer};
pub use notify::Notifier;
pub use page::{Context, Page};
pub use timer::{Interval, Timeout};

use vitrine_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in milliseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = timer::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "performance.now() is a small positive f64; whole ms fit in u64"
    )]
    let ms = ms as u64;
    HostTime(ms)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use vitrine_core::trace::InitStatus;

    use super::*;

    #[test]
    fn missing_element_reports_its_id() {
        let err = InitError::Missing("navbar");
        assert_eq!(err.status(), InitStatus::Missing("navbar"), "status");
        assert_eq!(
            err.to_string(),
            "required element `navbar` not found",
            "display"
        );
    }

    #[test]
    fn empty_selector_reports_the_selector() {
        let err = InitError::Empty(".faq-item");
        assert_eq!(err.status(), InitStatus::Empty(".faq-item"), "status");
        assert!(err.to_string().contains(".faq-item"), "display");
    }
}
