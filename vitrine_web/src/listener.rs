// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event listener and intersection observer handles.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attaches `callback` to `event` on `target`.
    ///
    /// The callback only runs for events that cast to `E`; use
    /// [`Event`] to receive everything.
    pub fn new<E: JsCast + 'static>(
        target: &EventTarget,
        event: &'static str,
        mut callback: impl FnMut(E) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                callback(e);
            }
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// The event type this listener is attached to.
    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` that disconnects when dropped.
///
/// The callback runs once per entry with the observer, so it can
/// `unobserve` targets it is done with.
pub struct Observer {
    observer: IntersectionObserver,
    _closure: ObserverClosure,
}

impl Observer {
    /// Creates an observer with the browser's default options.
    pub fn new(
        callback: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        Self::build(callback, None)
    }

    /// Creates an observer with a visibility `threshold` and CSS `root_margin`.
    pub fn with_options(
        threshold: f64,
        root_margin: &str,
        callback: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        Self::build(callback, Some(&options))
    }

    fn build(
        mut callback: impl FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
        options: Option<&IntersectionObserverInit>,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    callback(entry.unchecked_into(), &observer);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        let observer = match options {
            Some(options) => IntersectionObserver::new_with_options(function, options)?,
            None => IntersectionObserver::new(function)?,
        };
        Ok(Self {
            observer,
            _closure: closure,
        })
    }

    /// Starts watching `target`.
    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for Observer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}
