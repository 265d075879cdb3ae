// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared trace sink plumbing and the browser console sink.

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::console;

use vitrine_core::trace::{
    ComparisonEvent, CycleEvent, FilterEvent, FormEvent, InitEvent, InitStatus, NoopSink,
    NotificationEvent, TraceSink, Tracer,
};

/// A trace sink shared by every controller on the page.
///
/// Controllers outlive the call that created them (they live in event
/// closures), so the sink sits behind `Rc<RefCell<_>>`.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Rc<RefCell<dyn TraceSink>>,
}

impl Diagnostics {
    /// Shares `sink` with every controller.
    pub fn new(sink: impl TraceSink + 'static) -> Self {
        Self {
            sink: Rc::new(RefCell::new(sink)),
        }
    }

    /// Discards every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(NoopSink)
    }

    /// Runs `f` with a [`Tracer`] over the shared sink.
    ///
    /// Nested emission (a sink that triggers another event) is dropped
    /// rather than panicking on the `RefCell`.
    pub fn emit(&self, f: impl FnOnce(&mut Tracer<'_>)) {
        if let Ok(mut sink) = self.sink.try_borrow_mut() {
            let mut tracer = Tracer::new(&mut *sink);
            f(&mut tracer);
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::disabled()
    }
}

impl core::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

/// Writes one line per event to the browser console.
///
/// Skipped controllers and rejected forms go to `console.debug`; everything
/// else to `console.log`. A failed initialization is a `console.warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log successful initializations.
    pub verbose: bool,
}

impl ConsoleSink {
    /// Creates a sink that logs everything but successful inits.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }
}

fn log(line: &str) {
    console::log_1(&JsValue::from_str(line));
}

fn debug(line: &str) {
    console::debug_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_init(&mut self, e: &InitEvent) {
        let name = e.component.as_str();
        match e.status {
            InitStatus::Active if self.verbose => log(&format!("[init] {name} active")),
            InitStatus::Active => {}
            InitStatus::Missing(what) => debug(&format!("[init] {name} skipped: no {what}")),
            InitStatus::Empty(what) => debug(&format!("[init] {name} skipped: no {what} items")),
            InitStatus::Failed => console::warn_1(&JsValue::from_str(&format!(
                "[init] {name} failed: DOM call threw"
            ))),
        }
    }

    fn on_cycle(&mut self, e: &CycleEvent) {
        log(&format!(
            "[cycle] {} {} -> {} of {}",
            e.component.as_str(),
            e.from,
            e.to,
            e.len
        ));
    }

    fn on_filter(&mut self, e: &FilterEvent<'_>) {
        log(&format!(
            "[filter] {} {}={} changed={} visible={}",
            e.component.as_str(),
            e.dimension,
            e.value,
            e.changed,
            e.visible
        ));
    }

    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        match (e.kind, e.message) {
            (Some(kind), Some(message)) => log(&format!(
                "[notify] #{} {:?} {} \"{message}\"",
                e.id.0,
                e.stage,
                kind.as_str()
            )),
            _ => log(&format!("[notify] #{} {:?}", e.id.0, e.stage)),
        }
    }

    fn on_comparison(&mut self, e: &ComparisonEvent) {
        if !e.accepted {
            debug(&format!(
                "[compare] slider={} {:?} rejected {:.1}%",
                e.slider, e.source, e.requested
            ));
        }
    }

    fn on_form(&mut self, e: &FormEvent) {
        match e.result {
            Ok(()) => log(&format!("[form] {} ok", e.component.as_str())),
            Err(err) => debug(&format!("[form] {} rejected: {err}", e.component.as_str())),
        }
    }
}
