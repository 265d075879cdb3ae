// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Product grid ordering.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// The option chosen in the sort select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the current order.
    #[default]
    Featured,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Alphabetical by title.
    Name,
}

impl SortKey {
    /// Maps a select value; unknown values keep the current order.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Featured,
        }
    }
}

/// The sortable facts read off a product card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductKey {
    /// Price with every non-digit dropped (`"$1,299"` is 1299).
    pub price: u64,
    /// Card title.
    pub title: String,
}

impl ProductKey {
    /// Builds a key from the card's price and title text.
    #[must_use]
    pub fn from_text(price: &str, title: &str) -> Self {
        Self {
            price: parse_price(price),
            title: title.into(),
        }
    }
}

/// Keeps only the ASCII digits of `text` and parses them; 0 if none.
#[must_use]
pub fn parse_price(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// Returns the indices of `products` in display order for `key`.
///
/// The sort is stable, so ties (and [`SortKey::Featured`]) keep the current
/// relative order.
#[must_use]
pub fn sort_order(products: &[ProductKey], key: SortKey) -> Vec<usize> {
    let mut order: Vec<usize> = (0..products.len()).collect();
    let cmp = |a: &usize, b: &usize| -> Ordering {
        let (a, b) = (&products[*a], &products[*b]);
        match key {
            SortKey::Featured => Ordering::Equal,
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Name => a.title.cmp(&b.title),
        }
    };
    order.sort_by(cmp);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid() -> Vec<ProductKey> {
        vec![
            ProductKey::from_text("$1,299", "Luxe Velvet Sofa"),
            ProductKey::from_text("$89", "Ceramic Vase"),
            ProductKey::from_text("$349", "Brass Floor Lamp"),
            ProductKey::from_text("$89", "Arc Mirror"),
        ]
    }

    #[test]
    fn parse_select_values() {
        assert_eq!(SortKey::parse("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse("featured"), SortKey::Featured);
        assert_eq!(SortKey::parse(""), SortKey::Featured);
    }

    #[test]
    fn price_drops_non_digits() {
        assert_eq!(parse_price("$1,299"), 1_299);
        assert_eq!(parse_price("€ 45.00"), 4_500);
        assert_eq!(parse_price("call us"), 0);
    }

    #[test]
    fn price_low_is_stable() {
        assert_eq!(sort_order(&grid(), SortKey::PriceLow), [1, 3, 2, 0]);
    }

    #[test]
    fn price_high() {
        assert_eq!(sort_order(&grid(), SortKey::PriceHigh), [0, 2, 1, 3]);
    }

    #[test]
    fn by_name() {
        assert_eq!(sort_order(&grid(), SortKey::Name), [3, 2, 1, 0]);
    }

    #[test]
    fn featured_keeps_order() {
        assert_eq!(sort_order(&grid(), SortKey::Featured), [0, 1, 2, 3]);
    }
}
