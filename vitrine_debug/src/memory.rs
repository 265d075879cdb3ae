// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`MemorySink`] keeps an owned [`Record`] for every event it receives.
//! Borrowed fields (filter values, notification messages) are copied so
//! records outlive the controller call that produced them.

use vitrine_core::form::FormError;
use vitrine_core::notify::{NotificationId, NotificationKind};
use vitrine_core::trace::{
    ComparisonEvent, Component, CycleEvent, FilterEvent, FormEvent, InitEvent, NotificationEvent,
    NotificationStage, TraceSink,
};

/// An owned copy of one trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    /// See [`TraceSink::on_init`].
    Init(InitEvent),
    /// See [`TraceSink::on_cycle`].
    Cycle(CycleEvent),
    /// See [`TraceSink::on_filter`].
    Filter {
        /// The controller.
        component: Component,
        /// Dimension name.
        dimension: String,
        /// Selected value.
        value: String,
        /// Items whose visibility changed.
        changed: usize,
        /// Items matching every dimension.
        visible: usize,
    },
    /// See [`TraceSink::on_notification`].
    Notification {
        /// Notification id.
        id: NotificationId,
        /// Lifecycle step.
        stage: NotificationStage,
        /// Styling class, when shown.
        kind: Option<NotificationKind>,
        /// Message text, when shown.
        message: Option<String>,
    },
    /// See [`TraceSink::on_comparison`].
    Comparison(ComparisonEvent),
    /// See [`TraceSink::on_form`].
    Form(FormEvent),
}

/// Records every event it receives.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Vec<Record>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<Record> {
        core::mem::take(&mut self.records)
    }

    /// Form rejections recorded so far, oldest first.
    pub fn form_errors(&self) -> impl Iterator<Item = (Component, FormError)> + '_ {
        self.records.iter().filter_map(|r| match r {
            Record::Form(FormEvent {
                component,
                result: Err(err),
            }) => Some((*component, *err)),
            _ => None,
        })
    }
}

impl TraceSink for MemorySink {
    fn on_init(&mut self, e: &InitEvent) {
        self.records.push(Record::Init(*e));
    }

    fn on_cycle(&mut self, e: &CycleEvent) {
        self.records.push(Record::Cycle(*e));
    }

    fn on_filter(&mut self, e: &FilterEvent<'_>) {
        self.records.push(Record::Filter {
            component: e.component,
            dimension: e.dimension.to_owned(),
            value: e.value.to_owned(),
            changed: e.changed,
            visible: e.visible,
        });
    }

    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        self.records.push(Record::Notification {
            id: e.id,
            stage: e.stage,
            kind: e.kind,
            message: e.message.map(str::to_owned),
        });
    }

    fn on_comparison(&mut self, e: &ComparisonEvent) {
        self.records.push(Record::Comparison(*e));
    }

    fn on_form(&mut self, e: &FormEvent) {
        self.records.push(Record::Form(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::cycler::Cycler;
    use vitrine_core::trace::{InitStatus, Tracer};

    #[test]
    fn tracer_dispatches_into_memory() {
        let mut sink = MemorySink::new();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.init(&InitEvent {
                component: Component::Navbar,
                status: InitStatus::Active,
            });
            tracer.filter(&FilterEvent {
                component: Component::ProductFilter,
                dimension: "color",
                value: "gold",
                changed: 3,
                visible: 5,
            });
        }
        assert_eq!(sink.records().len(), 2, "both events recorded");
        assert_eq!(
            sink.records()[1],
            Record::Filter {
                component: Component::ProductFilter,
                dimension: "color".to_owned(),
                value: "gold".to_owned(),
                changed: 3,
                visible: 5,
            },
            "filter record owns its strings"
        );
    }

    #[test]
    fn cycler_moves_recorded_in_order() {
        let mut sink = MemorySink::new();
        let mut cycler = Cycler::new(vec![1, 2, 3, 4]).unwrap();
        for _ in 0..5 {
            let step = cycler.next();
            Tracer::new(&mut sink).cycle(&CycleEvent {
                component: Component::Testimonials,
                from: step.from,
                to: step.to,
                len: cycler.len(),
            });
        }
        let last = sink.take().pop();
        assert_eq!(
            last,
            Some(Record::Cycle(CycleEvent {
                component: Component::Testimonials,
                from: 0,
                to: 1,
                len: 4,
            })),
            "five steps over four items end on index 1"
        );
        assert!(sink.records().is_empty(), "take drains the sink");
    }

    #[test]
    fn form_errors_filters_successes() {
        let mut sink = MemorySink::new();
        sink.on_form(&FormEvent {
            component: Component::ConsultationForm,
            result: Ok(()),
        });
        sink.on_form(&FormEvent {
            component: Component::ContactForm,
            result: Err(FormError::MissingField("name")),
        });
        let errors: Vec<_> = sink.form_errors().collect();
        assert_eq!(
            errors,
            [(Component::ContactForm, FormError::MissingField("name"))],
            "only the rejection"
        );
    }
}
