// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification overlays.
//!
//! [`Notifier`] renders a [`NotificationBoard`] as fixed-position `<div>`s
//! appended to `<body>`. One [`Timeout`] per live notification wakes the
//! board at its next phase boundary; the board decides what changed.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use vitrine_core::notify::{
    NotificationBoard, NotificationChange, NotificationId, NotificationKind, NotifyConfig, Phase,
};
use vitrine_core::time::HostTime;
use vitrine_core::trace::{NotificationEvent, NotificationStage};

use crate::diagnostics::Diagnostics;
use crate::dom::InitError;
use crate::timer::Timeout;

const KEYFRAMES: &str = "
    @keyframes slideIn {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }
";

struct State {
    board: NotificationBoard,
    document: Document,
    elements: BTreeMap<NotificationId, HtmlElement>,
    timers: BTreeMap<NotificationId, Timeout>,
    diagnostics: Diagnostics,
}

/// Shows transient success and error overlays.
///
/// Cloning is cheap; every clone drives the same overlays.
#[derive(Clone)]
pub struct Notifier {
    state: Rc<RefCell<State>>,
}

impl core::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let live = self.state.try_borrow().map(|s| s.board.len()).ok();
        f.debug_struct("Notifier")
            .field("live", &live)
            .finish_non_exhaustive()
    }
}

impl Notifier {
    /// Creates a notifier and installs the slide animations in `<head>`.
    pub fn new(
        document: Document,
        config: NotifyConfig,
        diagnostics: Diagnostics,
    ) -> Result<Self, InitError> {
        let style = document.create_element("style")?;
        style.set_text_content(Some(KEYFRAMES));
        if let Some(head) = document.head() {
            head.append_child(&style)?;
        }
        Ok(Self {
            state: Rc::new(RefCell::new(State {
                board: NotificationBoard::new(config),
                document,
                elements: BTreeMap::new(),
                timers: BTreeMap::new(),
                diagnostics,
            })),
        })
    }

    /// Shows `message` styled as `kind`.
    ///
    /// Returns `None` if the overlay could not be created.
    pub fn show(&self, message: &str, kind: NotificationKind) -> Option<NotificationId> {
        let mut state = self.state.try_borrow_mut().ok()?;
        let el = state.render(message, kind)?;
        let now = crate::now();
        let (id, evicted) = state.board.notify(message, kind, now);
        state.apply(&evicted);
        state.diagnostics.emit(|t| {
            t.notification(&NotificationEvent {
                id,
                stage: NotificationStage::Shown,
                kind: Some(kind),
                message: Some(message),
            });
        });
        state.elements.insert(id, el);
        state.schedule(Rc::downgrade(&self.state), id, now);
        Some(id)
    }

    /// Shows a success overlay.
    pub fn success(&self, message: &str) -> Option<NotificationId> {
        self.show(message, NotificationKind::Success)
    }

    /// Shows an error overlay.
    pub fn error(&self, message: &str) -> Option<NotificationId> {
        self.show(message, NotificationKind::Error)
    }

    /// Number of overlays on screen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.try_borrow().map(|s| s.board.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing is on screen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl State {
    fn render(&self, message: &str, kind: NotificationKind) -> Option<HtmlElement> {
        let el: HtmlElement = self.document.create_element("div").ok()?.dyn_into().ok()?;
        el.set_class_name(&format!("notification {}", kind.as_str()));
        el.set_text_content(Some(message));
        el.style().set_css_text(&format!(
            "position: fixed; top: 100px; right: 20px; \
             background-color: {}; color: {}; \
             padding: 1rem 2rem; border-radius: 4px; \
             box-shadow: 0 4px 12px rgba(0,0,0,0.15); \
             z-index: 10000; animation: slideIn 0.3s ease;",
            kind.background(),
            kind.foreground(),
        ));
        self.document.body()?.append_child(&el).ok()?;
        Some(el)
    }

    /// Arms the timer for `id`'s next phase boundary.
    fn schedule(&mut self, weak: Weak<RefCell<Self>>, id: NotificationId, now: HostTime) {
        let Some(n) = self.board.get(id) else {
            self.timers.remove(&id);
            return;
        };
        let due = match n.phase {
            Phase::Showing => n.exit_at,
            Phase::Exiting => n.remove_at,
        };
        let timeout = Timeout::new(due - now, move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let Ok(mut state) = shared.try_borrow_mut() else {
                return;
            };
            let now = crate::now();
            let changes = state.board.advance(now);
            state.apply(&changes);
            state.schedule(weak, id, now);
        });
        self.timers.insert(id, timeout);
    }

    fn apply(&mut self, changes: &[NotificationChange]) {
        for &change in changes {
            let (id, stage) = match change {
                NotificationChange::Exiting(id) => {
                    if let Some(el) = self.elements.get(&id) {
                        let _ = el
                            .style()
                            .set_property("animation", "slideOut 0.3s ease");
                    }
                    (id, NotificationStage::Exiting)
                }
                NotificationChange::Removed(id) => {
                    if let Some(el) = self.elements.remove(&id) {
                        el.remove();
                    }
                    self.timers.remove(&id);
                    (id, NotificationStage::Removed)
                }
            };
            self.diagnostics.emit(|t| {
                t.notification(&NotificationEvent {
                    id,
                    stage,
                    kind: None,
                    message: None,
                });
            });
        }
    }
}
