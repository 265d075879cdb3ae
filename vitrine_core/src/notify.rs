// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient, self-dismissing notifications.
//!
//! [`NotificationBoard`] tracks every overlay currently on screen. Each
//! notification lives through two timed phases:
//!
//! ```text
//!   notify() ──► Showing ──(display)──► Exiting ──(exit)──► removed
//! ```
//!
//! The board is a pure timeline: callers feed it the current [`HostTime`]
//! through [`NotificationBoard::advance`] and apply the returned
//! [`NotificationChange`]s. The browser layer schedules one timeout per
//! phase boundary ([`Notification::exit_at`], [`Notification::remove_at`]).
//!
//! Under [`StackPolicy::Unbounded`] concurrent notifications stack without
//! de-duplication or cap and each one expires on its own schedule.
//! [`StackPolicy::Bounded`] evicts the oldest overlays once the cap is
//! reached.

use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::time::{Duration, HostTime};

/// Styling class of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Confirmation of a user action.
    #[default]
    Success,
    /// A rejected action, e.g. invalid input.
    Error,
}

impl NotificationKind {
    /// Class name appended to `notification`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Background color of the overlay.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "#d4edda",
            Self::Error => "#f8d7da",
        }
    }

    /// Text color of the overlay.
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Success => "#155724",
            Self::Error => "#721c24",
        }
    }
}

/// Identifies one notification for the lifetime of its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

/// Lifecycle phase of a live notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fully visible.
    Showing,
    /// Playing its exit transition.
    Exiting,
}

/// How many overlays may be on screen at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StackPolicy {
    /// No cap; every call adds an overlay.
    #[default]
    Unbounded,
    /// At most this many overlays; the oldest are removed to make room.
    Bounded(NonZeroUsize),
}

/// Timing and stacking configuration for a [`NotificationBoard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Time spent in [`Phase::Showing`].
    pub display: Duration,
    /// Length of the exit transition.
    pub exit: Duration,
    /// Stacking policy.
    pub policy: StackPolicy,
}

impl NotifyConfig {
    /// Storefront defaults: 3000 ms on screen, 300 ms exit, unbounded.
    #[must_use]
    pub const fn storefront() -> Self {
        Self {
            display: Duration(3_000),
            exit: Duration(300),
            policy: StackPolicy::Unbounded,
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::storefront()
    }
}

/// One live notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Identifier.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Styling class.
    pub kind: NotificationKind,
    /// Current phase.
    pub phase: Phase,
    /// When the exit transition starts.
    pub exit_at: HostTime,
    /// When the overlay is removed.
    pub remove_at: HostTime,
}

/// A state change the presenter has to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationChange {
    /// Start the exit transition.
    Exiting(NotificationId),
    /// Remove the overlay.
    Removed(NotificationId),
}

/// Every notification currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationBoard {
    config: NotifyConfig,
    next_id: u64,
    live: Vec<Notification>,
}

impl NotificationBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            config,
            next_id: 0,
            live: Vec::new(),
        }
    }

    /// The board's configuration.
    #[must_use]
    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Number of overlays on screen, including those exiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if nothing is on screen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Looks a live notification up.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id == id)
    }

    /// Iterates live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    /// Adds a notification created at `now`.
    ///
    /// Returns its id and the removals forced by a bounded policy.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: HostTime,
    ) -> (NotificationId, Vec<NotificationChange>) {
        let mut evicted = Vec::new();
        if let StackPolicy::Bounded(cap) = self.config.policy {
            while self.live.len() >= cap.get() {
                let oldest = self.live.remove(0);
                evicted.push(NotificationChange::Removed(oldest.id));
            }
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let exit_at = now + self.config.display;
        self.live.push(Notification {
            id,
            message: message.into(),
            kind,
            phase: Phase::Showing,
            exit_at,
            remove_at: exit_at + self.config.exit,
        });
        (id, evicted)
    }

    /// Moves every notification forward to `now`.
    ///
    /// A notification whose removal time has passed yields only
    /// [`NotificationChange::Removed`], even if its exit was never reported.
    pub fn advance(&mut self, now: HostTime) -> Vec<NotificationChange> {
        let mut changes = Vec::new();
        self.live.retain_mut(|n| {
            if now >= n.remove_at {
                changes.push(NotificationChange::Removed(n.id));
                return false;
            }
            if n.phase == Phase::Showing && now >= n.exit_at {
                n.phase = Phase::Exiting;
                changes.push(NotificationChange::Exiting(n.id));
            }
            true
        });
        changes
    }

    /// Removes a notification immediately.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.live.iter().position(|n| n.id == id)?;
        Some(self.live.remove(pos))
    }

    /// Removes everything, returning the ids that were live.
    pub fn clear(&mut self) -> Vec<NotificationId> {
        self.live.drain(..).map(|n| n.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::NotificationChange::{Exiting, Removed};

    fn board() -> NotificationBoard {
        NotificationBoard::new(NotifyConfig::storefront())
    }

    #[test]
    fn kind_styling() {
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(NotificationKind::Error.background(), "#f8d7da");
    }

    #[test]
    fn lifecycle_follows_fixed_delays() {
        let mut b = board();
        let (id, evicted) = b.notify("Added to wishlist!", NotificationKind::Success, HostTime(0));
        assert!(evicted.is_empty());

        assert!(b.advance(HostTime(2_999)).is_empty());
        assert_eq!(b.advance(HostTime(3_000)), [Exiting(id)]);
        assert_eq!(b.get(id).map(|n| n.phase), Some(Phase::Exiting));
        assert!(b.advance(HostTime(3_299)).is_empty());
        assert_eq!(b.advance(HostTime(3_300)), [Removed(id)]);
        assert!(b.is_empty());
    }

    #[test]
    fn back_to_back_notifications_expire_independently() {
        let mut b = board();
        let (first, _) = b.notify("one", NotificationKind::Success, HostTime(0));
        let (second, _) = b.notify("two", NotificationKind::Error, HostTime(5));
        assert_eq!(b.len(), 2);

        assert_eq!(b.advance(HostTime(3_000)), [Exiting(first)]);
        assert_eq!(b.advance(HostTime(3_005)), [Exiting(second)]);
        assert_eq!(b.advance(HostTime(3_300)), [Removed(first)]);
        assert_eq!(b.len(), 1);
        assert_eq!(b.advance(HostTime(3_305)), [Removed(second)]);
        assert!(b.is_empty());
    }

    #[test]
    fn unbounded_stacks_duplicates() {
        let mut b = board();
        for _ in 0..20 {
            b.notify("same", NotificationKind::Success, HostTime(0));
        }
        assert_eq!(b.len(), 20);
    }

    #[test]
    fn bounded_evicts_oldest() {
        let mut b = NotificationBoard::new(NotifyConfig {
            policy: StackPolicy::Bounded(NonZeroUsize::new(2).unwrap()),
            ..NotifyConfig::storefront()
        });
        let (a, _) = b.notify("a", NotificationKind::Success, HostTime(0));
        b.notify("b", NotificationKind::Success, HostTime(1));
        let (_, evicted) = b.notify("c", NotificationKind::Success, HostTime(2));
        assert_eq!(evicted, [Removed(a)]);
        let messages: Vec<_> = b.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["b", "c"]);
    }

    #[test]
    fn late_advance_skips_straight_to_removal() {
        let mut b = board();
        let (id, _) = b.notify("x", NotificationKind::Success, HostTime(100));
        assert_eq!(b.advance(HostTime(10_000)), [Removed(id)]);
    }

    #[test]
    fn dismiss_and_clear() {
        let mut b = board();
        let (a, _) = b.notify("a", NotificationKind::Success, HostTime(0));
        let (c, _) = b.notify("c", NotificationKind::Success, HostTime(0));
        assert_eq!(b.dismiss(a).map(|n| n.message), Some("a".into()));
        assert!(b.dismiss(a).is_none());
        assert_eq!(b.clear(), [c]);
    }

    #[test]
    fn deadlines_are_recorded() {
        let mut b = board();
        let (id, _) = b.notify("x", NotificationKind::Error, HostTime(1_000));
        let n = b.get(id).unwrap();
        assert_eq!(n.exit_at, HostTime(4_000));
        assert_eq!(n.remove_at, HostTime(4_300));
    }
}
