// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use vitrine_core::trace::{
    ComparisonEvent, CycleEvent, FilterEvent, FormEvent, InitEvent, NotificationEvent,
    NotificationStage, TraceSink,
};

use crate::status_parts;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn stage_name(stage: NotificationStage) -> &'static str {
    match stage {
        NotificationStage::Shown => "shown",
        NotificationStage::Exiting => "exiting",
        NotificationStage::Removed => "removed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_init(&mut self, e: &InitEvent) {
        let (status, detail) = status_parts(e.status);
        let _ = match detail {
            Some(what) => writeln!(
                self.writer,
                "[init] {} {status} ({what})",
                e.component.as_str(),
            ),
            None => writeln!(self.writer, "[init] {} {status}", e.component.as_str()),
        };
    }

    fn on_cycle(&mut self, e: &CycleEvent) {
        let _ = writeln!(
            self.writer,
            "[cycle] {} {} -> {} of {}",
            e.component.as_str(),
            e.from,
            e.to,
            e.len,
        );
    }

    fn on_filter(&mut self, e: &FilterEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[filter] {} {}={} changed={} visible={}",
            e.component.as_str(),
            e.dimension,
            e.value,
            e.changed,
            e.visible,
        );
    }

    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        let _ = match (e.kind, e.message) {
            (Some(kind), Some(message)) => writeln!(
                self.writer,
                "[notify] #{} {} {} {message:?}",
                e.id.0,
                stage_name(e.stage),
                kind.as_str(),
            ),
            _ => writeln!(self.writer, "[notify] #{} {}", e.id.0, stage_name(e.stage)),
        };
    }

    fn on_comparison(&mut self, e: &ComparisonEvent) {
        let verdict = if e.accepted { "ok" } else { "REJECTED" };
        let _ = writeln!(
            self.writer,
            "[compare] slider={} {:?} {:.1}% {verdict}",
            e.slider, e.source, e.requested,
        );
    }

    fn on_form(&mut self, e: &FormEvent) {
        let _ = match e.result {
            Ok(()) => writeln!(self.writer, "[form] {} ok", e.component.as_str()),
            Err(err) => writeln!(
                self.writer,
                "[form] {} rejected: {err}",
                e.component.as_str(),
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::form::FormError;
    use vitrine_core::notify::{NotificationId, NotificationKind};
    use vitrine_core::trace::{Component, InitStatus, InputSource};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn init_line_names_missing_element() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_init(&InitEvent {
            component: Component::Lightbox,
            status: InitStatus::Missing("lightbox"),
        });
        let output = output(sink);
        assert_eq!(output, "[init] lightbox missing (lightbox)\n", "got: {output}");
    }

    #[test]
    fn cycle_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_cycle(&CycleEvent {
            component: Component::Testimonials,
            from: 3,
            to: 0,
            len: 4,
        });
        let output = output(sink);
        assert!(output.contains("[cycle] testimonials 3 -> 0 of 4"), "got: {output}");
    }

    #[test]
    fn shown_notification_includes_message() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_notification(&NotificationEvent {
            id: NotificationId(7),
            stage: NotificationStage::Shown,
            kind: Some(NotificationKind::Error),
            message: Some("Please enter a valid email address."),
        });
        sink.on_notification(&NotificationEvent {
            id: NotificationId(7),
            stage: NotificationStage::Removed,
            kind: None,
            message: None,
        });
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "[notify] #7 shown error \"Please enter a valid email address.\"",
                "[notify] #7 removed",
            ],
            "got: {output}"
        );
    }

    #[test]
    fn rejected_comparison_is_flagged() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_comparison(&ComparisonEvent {
            slider: 0,
            source: InputSource::Pointer,
            requested: 150.0,
            accepted: false,
        });
        let output = output(sink);
        assert!(output.contains("150.0% REJECTED"), "got: {output}");
    }

    #[test]
    fn form_error_uses_display_text() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_form(&FormEvent {
            component: Component::ContactForm,
            result: Err(FormError::MissingField("subject")),
        });
        let output = output(sink);
        assert!(
            output.contains("contact-form rejected: Please fill in all required fields."),
            "got: {output}"
        );
    }
}
