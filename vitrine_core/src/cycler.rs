// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index cycling with wraparound.
//!
//! A [`Cycler`] holds an ordered, non-empty list of items and a current
//! position into it. Every movement goes through [`Cycler::go_to`], which
//! normalizes the target modulo the length and reports a [`Transition`]
//! naming the one slot that lost the active state and the one that gained
//! it. Presenters apply exactly that pair, never more.
//!
//! The lightbox and the testimonial slider are both cyclers; they differ
//! only in what they render for the active item.

use alloc::vec::Vec;

/// The change produced by one cycler movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Index that was active before the movement.
    pub from: usize,
    /// Index that is active after the movement.
    pub to: usize,
}

impl Transition {
    /// Returns `true` if the movement landed on the already active index.
    #[inline]
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// An ordered list of items with a wrapping current index.
///
/// Construction rejects an empty list, so `index < len` always holds and
/// [`current_item`](Self::current_item) never fails.
#[derive(Clone, Debug)]
pub struct Cycler<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Cycler<T> {
    /// Creates a cycler positioned at index 0.
    ///
    /// Returns `None` for an empty list; owners skip their initialization in
    /// that case.
    #[must_use]
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, index: 0 })
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current index.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The item at the current index.
    #[must_use]
    pub fn current_item(&self) -> &T {
        &self.items[self.index]
    }

    /// All items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Moves to `index mod len`.
    pub fn go_to(&mut self, index: usize) -> Transition {
        let from = self.index;
        self.index = index % self.items.len();
        Transition {
            from,
            to: self.index,
        }
    }

    /// Advances by one, wrapping from the last item to the first.
    pub fn next(&mut self) -> Transition {
        self.go_to(self.index + 1)
    }

    /// Retreats by one, wrapping from the first item to the last.
    pub fn previous(&mut self) -> Transition {
        // `index + len - 1` stays non-negative and is congruent to `index - 1`.
        self.go_to(self.index + self.items.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn testimonials() -> Cycler<&'static str> {
        Cycler::new(vec!["ava", "ben", "cleo", "dev"]).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(Cycler::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn starts_at_zero() {
        let c = testimonials();
        assert_eq!(c.index(), 0);
        assert_eq!(*c.current_item(), "ava");
    }

    #[test]
    fn next_len_times_is_identity() {
        for start in 0..4 {
            let mut c = testimonials();
            c.go_to(start);
            for _ in 0..c.len() {
                c.next();
            }
            assert_eq!(c.index(), start, "closure under wraparound from {start}");
        }
    }

    #[test]
    fn previous_inverts_next() {
        for start in 0..4 {
            let mut c = testimonials();
            c.go_to(start);
            c.next();
            c.previous();
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn five_steps_over_four_cards_lands_on_one() {
        let mut c = testimonials();
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut c = testimonials();
        let t = c.previous();
        assert_eq!(t, Transition { from: 0, to: 3 });
        assert_eq!(*c.current_item(), "dev");
    }

    #[test]
    fn go_to_normalizes_out_of_range() {
        let mut c = testimonials();
        let t = c.go_to(10);
        assert_eq!(t, Transition { from: 0, to: 2 });
    }

    #[test]
    fn transition_reports_single_pair() {
        let mut c = testimonials();
        c.go_to(1);
        let t = c.go_to(1);
        assert!(t.is_noop());
        let t = c.next();
        assert_eq!((t.from, t.to), (1, 2));
    }

    #[test]
    fn single_item_cycles_onto_itself() {
        let mut c = Cycler::new(vec![7_u8]).unwrap();
        assert!(c.next().is_noop());
        assert!(c.previous().is_noop());
    }
}
