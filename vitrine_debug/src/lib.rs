// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side sinks for vitrine diagnostics.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`]: one human-readable line per event.
//! - [`jsonl::JsonLinesSink`]: one JSON object per line, for piping into
//!   other tools.
//! - [`memory::MemorySink`]: owned copies of every event, for assertions.

pub mod jsonl;
pub mod memory;
pub mod pretty;

use vitrine_core::trace::InitStatus;

/// Short label and optional detail for an [`InitStatus`].
pub(crate) fn status_parts(status: InitStatus) -> (&'static str, Option<&'static str>) {
    match status {
        InitStatus::Active => ("active", None),
        InitStatus::Missing(what) => ("missing", Some(what)),
        InitStatus::Empty(what) => ("empty", Some(what)),
        InitStatus::Failed => ("failed", None),
    }
}
