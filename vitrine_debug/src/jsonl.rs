// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON lines export.
//!
//! [`JsonLinesSink`] writes each event as a single JSON object followed by a
//! newline. Every object has an `"event"` key naming the event kind; the
//! remaining keys mirror the event's fields.

use std::io::Write;

use serde_json::{Value, json};

use vitrine_core::trace::{
    ComparisonEvent, CycleEvent, FilterEvent, FormEvent, InitEvent, NotificationEvent,
    NotificationStage, TraceSink,
};

use crate::status_parts;

/// Writes one JSON object per event to a [`Write`] destination.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of lines written successfully.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, value: &Value) {
        if serde_json::to_writer(&mut self.writer, value).is_ok()
            && self.writer.write_all(b"\n").is_ok()
        {
            self.written += 1;
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_init(&mut self, e: &InitEvent) {
        let (status, detail) = status_parts(e.status);
        self.write(&json!({
            "event": "init",
            "component": e.component.as_str(),
            "status": status,
            "detail": detail,
        }));
    }

    fn on_cycle(&mut self, e: &CycleEvent) {
        self.write(&json!({
            "event": "cycle",
            "component": e.component.as_str(),
            "from": e.from,
            "to": e.to,
            "len": e.len,
        }));
    }

    fn on_filter(&mut self, e: &FilterEvent<'_>) {
        self.write(&json!({
            "event": "filter",
            "component": e.component.as_str(),
            "dimension": e.dimension,
            "value": e.value,
            "changed": e.changed,
            "visible": e.visible,
        }));
    }

    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        let stage = match e.stage {
            NotificationStage::Shown => "shown",
            NotificationStage::Exiting => "exiting",
            NotificationStage::Removed => "removed",
        };
        self.write(&json!({
            "event": "notification",
            "id": e.id.0,
            "stage": stage,
            "kind": e.kind.map(|k| k.as_str()),
            "message": e.message,
        }));
    }

    fn on_comparison(&mut self, e: &ComparisonEvent) {
        self.write(&json!({
            "event": "comparison",
            "slider": e.slider,
            "source": format!("{:?}", e.source),
            "requested": e.requested,
            "accepted": e.accepted,
        }));
    }

    fn on_form(&mut self, e: &FormEvent) {
        let error = e.result.err().map(|err| err.to_string());
        self.write(&json!({
            "event": "form",
            "component": e.component.as_str(),
            "ok": e.result.is_ok(),
            "error": error,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::form::FormError;
    use vitrine_core::trace::{Component, InitStatus, InputSource};

    fn lines(sink: JsonLinesSink<Vec<u8>>) -> Vec<Value> {
        let bytes = sink.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        text.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn one_object_per_event() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.on_init(&InitEvent {
            component: Component::Faq,
            status: InitStatus::Active,
        });
        sink.on_filter(&FilterEvent {
            component: Component::GalleryFilter,
            dimension: "category",
            value: "kitchen",
            changed: 1,
            visible: 2,
        });
        assert_eq!(sink.written(), 2, "two events written");

        let values = lines(sink);
        assert_eq!(values.len(), 2, "one line per event");
        assert_eq!(values[0]["event"], "init", "first event");
        assert_eq!(values[0]["status"], "active", "init status");
        assert!(values[0]["detail"].is_null(), "no detail when active");
        assert_eq!(values[1]["value"], "kitchen", "filter value");
        assert_eq!(values[1]["visible"], 2, "visible count");
    }

    #[test]
    fn missing_init_carries_selector() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.on_init(&InitEvent {
            component: Component::Testimonials,
            status: InitStatus::Empty(".testimonial-card"),
        });
        let values = lines(sink);
        assert_eq!(values[0]["status"], "empty", "status label");
        assert_eq!(values[0]["detail"], ".testimonial-card", "selector detail");
    }

    #[test]
    fn comparison_and_form_fields() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.on_comparison(&ComparisonEvent {
            slider: 1,
            source: InputSource::Touch,
            requested: 42.5,
            accepted: true,
        });
        sink.on_form(&FormEvent {
            component: Component::Newsletter,
            result: Err(FormError::InvalidEmail),
        });
        let values = lines(sink);
        assert_eq!(values[0]["source"], "Touch", "input source");
        assert_eq!(values[0]["requested"], 42.5, "requested position");
        assert_eq!(values[1]["ok"], false, "form rejected");
        assert_eq!(
            values[1]["error"], "Please enter a valid email address.",
            "error text"
        );
    }
}
