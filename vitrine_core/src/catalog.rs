// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-page shopping affordances: quantity stepper, wishlist and cart badge.
//!
//! None of this is persisted; reloading the page starts from the markup.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;

/// Message shown when a product enters the wishlist.
pub const WISHLIST_ADDED: &str = "Added to wishlist!";
/// Message shown when a product leaves the wishlist.
pub const WISHLIST_REMOVED: &str = "Removed from wishlist";
/// Message shown once every product is loaded.
pub const ALL_LOADED: &str = "All products loaded!";
/// Label of the load-more button while loading.
pub const LOADING_LABEL: &str = "Loading...";

/// The quick-view quantity input; never below 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantity(u32);

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

impl Quantity {
    /// Parses the input value, falling back to 1 for garbage or values
    /// below 1.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(v) if v >= 1 => Self(v),
            _ => Self(1),
        }
    }

    /// The current value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One less, unless already at 1.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { self }
    }

    /// One more.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Products marked as wished for on this page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wishlist {
    items: BTreeSet<usize>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a product as already wished for (filled icon in the markup).
    pub fn preload(&mut self, product: usize) {
        self.items.insert(product);
    }

    /// Whether `product` is wished for.
    #[must_use]
    pub fn contains(&self, product: usize) -> bool {
        self.items.contains(&product)
    }

    /// Number of wished products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is wished for.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flips `product` and returns whether it is now wished for.
    pub fn toggle(&mut self, product: usize) -> bool {
        if self.items.remove(&product) {
            false
        } else {
            self.items.insert(product);
            true
        }
    }

    /// The notification text for a toggle result.
    #[must_use]
    pub const fn message(added: bool) -> &'static str {
        if added { WISHLIST_ADDED } else { WISHLIST_REMOVED }
    }
}

/// The cart badge counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CartBadge {
    count: u32,
}

impl CartBadge {
    /// Starts from the count printed in the markup, or 0 if unreadable.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let count = raw.trim().parse().unwrap_or(0);
        Self { count }
    }

    /// The current count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Adds one product and returns the notification text.
    pub fn add(&mut self, title: &str) -> String {
        self.count = self.count.saturating_add(1);
        format!("\"{title}\" added to cart!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_never_below_one() {
        let q = Quantity::parse("1");
        assert_eq!(q.decrement().get(), 1);
        assert_eq!(q.increment().increment().decrement().get(), 2);
        assert_eq!(Quantity::parse("0").get(), 1);
        assert_eq!(Quantity::parse("x").get(), 1);
        assert_eq!(Quantity::parse(" 4 ").get(), 4);
    }

    #[test]
    fn wishlist_toggles() {
        let mut w = Wishlist::new();
        assert!(w.toggle(3));
        assert_eq!(Wishlist::message(true), "Added to wishlist!");
        assert!(!w.toggle(3));
        assert_eq!(Wishlist::message(false), "Removed from wishlist");
        assert!(w.is_empty());
    }

    #[test]
    fn preloaded_item_toggles_off() {
        let mut w = Wishlist::new();
        w.preload(1);
        assert!(w.contains(1));
        assert!(!w.toggle(1));
    }

    #[test]
    fn cart_badge_counts_up() {
        let mut cart = CartBadge::from_text("2");
        let msg = cart.add("Luxe Velvet Sofa");
        assert_eq!(cart.count(), 3);
        assert_eq!(msg, "\"Luxe Velvet Sofa\" added to cart!");
        assert_eq!(CartBadge::from_text("").count(), 0);
    }
}
