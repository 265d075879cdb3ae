// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boolean page chrome: the mobile menu and scroll-linked classes.

/// An open/closed switch, e.g. the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    /// Creates a closed toggle.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the toggle is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// A class that is present while the page is scrolled past a threshold.
///
/// [`update`](Self::update) reports only crossings so presenters do not
/// rewrite the class list on every scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    threshold: f64,
    active: bool,
}

impl ScrollThreshold {
    /// Creates an inactive threshold. The class applies when the scroll
    /// offset is strictly greater than `threshold`.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: false,
        }
    }

    /// Whether the class currently applies.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Feeds a scroll offset; returns `Some(active)` when the state flips.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let active = scroll_y > self.threshold;
        if active == self.active {
            return None;
        }
        self.active = active;
        Some(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut menu = Toggle::new();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn threshold_reports_crossings_only() {
        let mut navbar = ScrollThreshold::new(50.0);
        assert_eq!(navbar.update(10.0), None);
        assert_eq!(navbar.update(50.0), None);
        assert_eq!(navbar.update(51.0), Some(true));
        assert_eq!(navbar.update(400.0), None);
        assert_eq!(navbar.update(0.0), Some(false));
        assert!(!navbar.is_active());
    }
}
