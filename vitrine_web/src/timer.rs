// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` / `setInterval` handles.
//!
//! [`Timeout`] and [`Interval`] own the JS closure they registered and cancel
//! it when dropped, so replacing a stored handle supersedes the pending
//! callback. Dropping a handle from inside its own callback is allowed; the
//! closure is freed once the call returns.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use vitrine_core::time::Duration;

// Direct global bindings instead of `web_sys::Window` methods, so scheduling
// never has to fetch (and unwrap) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

/// A one-shot timer, cancelled on drop.
pub struct Timeout {
    id: i32,
    delay: Duration,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Runs `callback` once after `delay`.
    pub fn new(delay: Duration, callback: impl FnOnce() + 'static) -> Self {
        let closure: Closure<dyn FnMut()> = Closure::once(callback);
        let id = set_timeout(closure.as_ref().unchecked_ref(), delay.as_timeout());
        Self {
            id,
            delay,
            _closure: closure,
        }
    }

    /// The delay this timeout was scheduled with.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        clear_timeout(self.id);
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// A repeating timer, cancelled on drop.
pub struct Interval {
    id: i32,
    period: Duration,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Runs `callback` every `period` until the handle is dropped.
    pub fn new(period: Duration, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref().unchecked_ref(), period.as_timeout());
        Self {
            id,
            period,
            _closure: closure,
        }
    }

    /// The period this interval fires at.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        clear_interval(self.id);
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("id", &self.id)
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}
