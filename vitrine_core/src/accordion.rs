// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-open accordion (the FAQ list).

/// Which panel of an accordion is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Creates an accordion of `len` panels, all closed.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// The open panel.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Handles a click on panel `index`.
    ///
    /// Clicking the open panel closes it; clicking any other panel closes
    /// the open one and opens the clicked one. Out-of-range clicks are
    /// ignored. Returns the new open panel.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_open() {
        let mut faq = Accordion::new(3);
        assert_eq!(faq.toggle(0), Some(0));
        assert_eq!(faq.toggle(2), Some(2));
        assert_eq!(faq.open(), Some(2));
    }

    #[test]
    fn clicking_open_panel_closes_it() {
        let mut faq = Accordion::new(3);
        faq.toggle(1);
        assert_eq!(faq.toggle(1), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut faq = Accordion::new(2);
        faq.toggle(1);
        assert_eq!(faq.toggle(5), Some(1));
    }
}
