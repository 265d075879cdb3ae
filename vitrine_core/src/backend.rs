// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presenter contract for page integrations.
//!
//! State holders in this crate never touch a document. They return small
//! change descriptions ([`Transition`], [`FilterOutcome`]) and a presenter
//! applies them to whatever tree backs the page. `vitrine_web` implements
//! these traits on top of DOM elements; tests implement them with recording
//! doubles.
//!
//! # Crate boundaries
//!
//! `vitrine_core` owns the state, the invariants and this contract module.
//! `vitrine_web` depends on it and provides the DOM glue plus the timer and
//! listener handles. Application code (`luxe_site`) wires both together at
//! page load.
//!
//! [`FilterOutcome`]: crate::filter::FilterOutcome

use crate::cycler::Transition;
use crate::filter::Visibility;

/// Applies cycler movements to a presentation tree.
pub trait CyclerPresenter {
    /// Renders the item at `transition.to` and moves the active marker from
    /// `transition.from` to `transition.to`.
    fn show(&mut self, transition: Transition);
}

/// Applies filter outcomes to a presentation tree.
pub trait FilterPresenter {
    /// Sets the rendered state of item `index`.
    fn set_visibility(&mut self, index: usize, visibility: Visibility);

    /// Displays the number of items that match every active dimension.
    fn set_visible_count(&mut self, count: usize) {
        _ = count;
    }
}
