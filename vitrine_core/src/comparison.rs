// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Before/after comparison slider.
//!
//! [`Comparison`] holds one scalar, the reveal boundary as a percentage of the
//! component's width. Three input paths converge on it:
//!
//! - the range input ([`Comparison::set_from_input`]),
//! - a mouse drag, active between [`Comparison::pointer_down`] and
//!   [`Comparison::pointer_up`] ([`Comparison::pointer_move`]),
//! - a touch move ([`Comparison::touch_move`]), which needs no press.
//!
//! Every path funnels through [`Comparison::set_position`], which **rejects**
//! values outside `[0, 100]` instead of saturating them. A pointer that leaves
//! the component therefore freezes the boundary at its last in-range value.

use kurbo::{Point, Rect};

/// Lower bound of the reveal position.
pub const MIN_POSITION: f64 = 0.0;
/// Upper bound of the reveal position.
pub const MAX_POSITION: f64 = 100.0;
/// Starting position, the middle of the component.
pub const INITIAL_POSITION: f64 = 50.0;

/// Reveal-boundary state for one before/after component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    position: f64,
    dragging: bool,
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparison {
    /// Creates a slider at [`INITIAL_POSITION`], not dragging.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
            dragging: false,
        }
    }

    /// Current position in `[0, 100]`.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Whether a mouse drag is in progress.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Right-hand inset of the after-image, in percent.
    #[inline]
    #[must_use]
    pub fn clip_inset(&self) -> f64 {
        MAX_POSITION - self.position
    }

    /// Assigns `position` if it lies in `[0, 100]`.
    ///
    /// Returns the accepted value, or `None` (state unchanged) for values out
    /// of range or NaN.
    pub fn set_position(&mut self, position: f64) -> Option<f64> {
        if (MIN_POSITION..=MAX_POSITION).contains(&position) {
            self.position = position;
            Some(position)
        } else {
            None
        }
    }

    /// Handles a range-input change carrying the raw input value.
    pub fn set_from_input(&mut self, raw: &str) -> Option<f64> {
        let value = raw.trim().parse::<f64>().ok()?;
        self.set_position(value)
    }

    /// Starts a mouse drag.
    pub fn pointer_down(&mut self) {
        self.dragging = true;
    }

    /// Ends a mouse drag. Bound to the whole document, so the drag ends even
    /// if the button is released outside the component.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Handles a mouse move at `pointer` over a component occupying
    /// `bounds`. Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, pointer: Point, bounds: Rect) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.set_position(percentage_across(pointer, bounds)?)
    }

    /// Handles a touch move at `touch` over a component occupying `bounds`.
    pub fn touch_move(&mut self, touch: Point, bounds: Rect) -> Option<f64> {
        self.set_position(percentage_across(touch, bounds)?)
    }
}

/// Horizontal offset of `point` into `bounds`, as a percentage of its width.
///
/// Returns `None` for a zero-width component.
#[must_use]
pub fn percentage_across(point: Point, bounds: Rect) -> Option<f64> {
    let width = bounds.width();
    if width <= 0.0 {
        return None;
    }
    Some((point.x - bounds.x0) / width * MAX_POSITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(100.0, 0.0, 500.0, 300.0);

    #[test]
    fn starts_centered() {
        let c = Comparison::new();
        assert_eq!(c.position(), 50.0);
        assert_eq!(c.clip_inset(), 50.0);
    }

    #[test]
    fn out_of_range_is_rejected_not_saturated() {
        let mut c = Comparison::new();
        assert_eq!(c.set_position(30.0), Some(30.0));
        assert_eq!(c.set_position(100.5), None);
        assert_eq!(c.set_position(-0.1), None);
        assert_eq!(c.set_position(f64::NAN), None);
        assert_eq!(c.position(), 30.0);
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut c = Comparison::new();
        assert_eq!(c.set_position(0.0), Some(0.0));
        assert_eq!(c.set_position(100.0), Some(100.0));
        assert_eq!(c.clip_inset(), 0.0);
    }

    #[test]
    fn input_parses_raw_value() {
        let mut c = Comparison::new();
        assert_eq!(c.set_from_input("72"), Some(72.0));
        assert_eq!(c.set_from_input("abc"), None);
        assert_eq!(c.set_from_input("140"), None);
        assert_eq!(c.position(), 72.0);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut c = Comparison::new();
        assert_eq!(c.pointer_move(Point::new(200.0, 10.0), BOUNDS), None);
        assert_eq!(c.position(), 50.0);
    }

    #[test]
    fn drag_maps_pointer_to_percentage() {
        let mut c = Comparison::new();
        c.pointer_down();
        assert_eq!(c.pointer_move(Point::new(200.0, 10.0), BOUNDS), Some(25.0));
        c.pointer_up();
        assert!(!c.is_dragging());
        assert_eq!(c.pointer_move(Point::new(400.0, 10.0), BOUNDS), None);
        assert_eq!(c.position(), 25.0);
    }

    #[test]
    fn drag_past_right_edge_is_rejected() {
        let mut c = Comparison::new();
        c.pointer_down();
        c.pointer_move(Point::new(300.0, 0.0), BOUNDS);
        // 150% of the width.
        let x = BOUNDS.x0 + 1.5 * BOUNDS.width();
        assert_eq!(c.pointer_move(Point::new(x, 0.0), BOUNDS), None);
        assert_eq!(c.position(), 50.0);
    }

    #[test]
    fn touch_needs_no_press() {
        let mut c = Comparison::new();
        assert_eq!(c.touch_move(Point::new(500.0, 0.0), BOUNDS), Some(100.0));
        assert_eq!(c.touch_move(Point::new(50.0, 0.0), BOUNDS), None);
        assert_eq!(c.position(), 100.0);
    }

    #[test]
    fn zero_width_component_is_ignored() {
        let mut c = Comparison::new();
        let flat = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(c.touch_move(Point::new(10.0, 0.0), flat), None);
    }
}
