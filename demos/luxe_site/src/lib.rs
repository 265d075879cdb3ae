// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the Luxe Interiors storefront.
//!
//! One wasm module serves every page of the site (home, gallery, products,
//! contact). At start it attaches each controller whose markup is present and
//! logs the rest as skipped, so the same bundle works on all of them.
//!
//! Build with: `wasm-pack build --target web demos/luxe_site`
//!
//! Then load the generated `pkg/luxe_site.js` as a module from each page.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::string::ToString;

use wasm_bindgen::prelude::*;

use vitrine_core::config::SiteConfig;
use vitrine_web::{ConsoleSink, Diagnostics, Page};

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let sink = ConsoleSink {
        verbose: cfg!(debug_assertions),
    };
    let page = Page::init(SiteConfig::storefront(), Diagnostics::new(sink))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    log_summary(page.active().count(), page.statuses().len());

    // The page lives as long as the document does.
    core::mem::forget(page);
    Ok(())
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = "info")]
    fn console_info(message: &str);
}

fn log_summary(active: usize, total: usize) {
    console_info(&alloc::format!("vitrine: {active} of {total} controllers attached"));
}
