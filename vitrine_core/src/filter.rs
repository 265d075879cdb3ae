// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-criterion visibility filtering.
//!
//! A [`FilterSet`] owns a list of items tagged along one or more
//! [dimensions](DimensionId) (e.g. category, color) and the active
//! [`FilterValue`] per dimension. An item matches when, for every dimension,
//! the active value is [`FilterValue::All`] or equals the item's tag.
//!
//! Dimensions compose conjunctively. Each dimension carries a [`Policy`]
//! deciding how a mismatch is presented: [`Policy::Hide`] removes the item
//! from layout, [`Policy::Dim`] keeps it in place but faded and inert. A
//! hiding mismatch wins over a dimming one. The visible count is the number
//! of items that are [`Visibility::Shown`], i.e. that match every dimension.
//!
//! [`FilterSet::apply_filter`] returns a [`FilterOutcome`] that lists only the
//! items whose [`Visibility`] changed, so presenters touch the minimum number
//! of nodes.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::backend::FilterPresenter;

/// The sentinel filter value that matches every item.
pub const ALL: &str = "all";

/// How an item that fails a dimension's filter is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Remove the item from layout.
    Hide,
    /// Keep the item in layout with reduced opacity and no interaction.
    Dim,
}

/// Rendered state of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Matches every active dimension.
    #[default]
    Shown,
    /// Fails at least one [`Policy::Dim`] dimension and no hiding one.
    Dimmed,
    /// Fails at least one [`Policy::Hide`] dimension.
    Hidden,
}

/// The active selection for one dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterValue {
    /// Matches every item.
    #[default]
    All,
    /// Matches items whose tag equals the value.
    Only(String),
}

impl FilterValue {
    /// Parses a raw attribute value; [`ALL`] maps to [`FilterValue::All`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            Self::All
        } else {
            Self::Only(raw.into())
        }
    }

    /// Returns `true` if an item carrying `tag` passes this value.
    ///
    /// An untagged item only passes [`FilterValue::All`].
    #[must_use]
    pub fn matches(&self, tag: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => tag == Some(value.as_str()),
        }
    }
}

/// Handle to a dimension registered with [`FilterSet::add_dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DimensionId(u32);

impl DimensionId {
    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Tags carried by one filterable item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    tags: BTreeMap<DimensionId, String>,
}

impl Item {
    /// Creates an item with no tags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the tag for `dimension`.
    #[must_use]
    pub fn with_tag(mut self, dimension: DimensionId, tag: impl Into<String>) -> Self {
        self.tags.insert(dimension, tag.into());
        self
    }

    /// Returns the tag for `dimension`, if any.
    #[must_use]
    pub fn tag(&self, dimension: DimensionId) -> Option<&str> {
        self.tags.get(&dimension).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
struct Dimension {
    name: String,
    policy: Policy,
    active: FilterValue,
}

/// Result of a filter change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Items whose visibility changed, with their new state, in item order.
    pub changed: Vec<(usize, Visibility)>,
    /// Number of [`Visibility::Shown`] items after the change.
    pub visible: usize,
}

impl FilterOutcome {
    /// Pushes this outcome to a presenter: one call per changed item, then
    /// the new count.
    pub fn present(&self, presenter: &mut impl FilterPresenter) {
        for &(index, visibility) in &self.changed {
            presenter.set_visibility(index, visibility);
        }
        presenter.set_visible_count(self.visible);
    }
}

/// Items plus the active selection across every dimension.
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    dimensions: Vec<Dimension>,
    items: Vec<Item>,
    visibility: Vec<Visibility>,
}

impl FilterSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dimension whose selection starts at [`FilterValue::All`].
    pub fn add_dimension(&mut self, name: impl Into<String>, policy: Policy) -> DimensionId {
        let id = DimensionId(u32::try_from(self.dimensions.len()).unwrap_or(u32::MAX));
        self.dimensions.push(Dimension {
            name: name.into(),
            policy,
            active: FilterValue::All,
        });
        id
    }

    /// Appends an item and returns its index.
    ///
    /// The item's initial visibility is computed against the current
    /// selection.
    pub fn push_item(&mut self, item: Item) -> usize {
        let visibility = self.evaluate(&item);
        self.items.push(item);
        self.visibility.push(visibility);
        self.items.len() - 1
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks a dimension up by name.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<DimensionId> {
        self.dimensions
            .iter()
            .position(|d| d.name == name)
            .and_then(|i| u32::try_from(i).ok())
            .map(DimensionId)
    }

    /// Returns the name a dimension was registered with.
    #[must_use]
    pub fn dimension_name(&self, dimension: DimensionId) -> Option<&str> {
        self.dimensions
            .get(dimension.0 as usize)
            .map(|d| d.name.as_str())
    }

    /// Returns the active selection for `dimension`.
    #[must_use]
    pub fn selection(&self, dimension: DimensionId) -> Option<&FilterValue> {
        self.dimensions.get(dimension.0 as usize).map(|d| &d.active)
    }

    /// Returns the current visibility of item `index`.
    #[must_use]
    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        self.visibility.get(index).copied()
    }

    /// Number of items matching every dimension.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visibility
            .iter()
            .filter(|v| **v == Visibility::Shown)
            .count()
    }

    /// Sets the active value of `dimension` and recomputes every item.
    ///
    /// An unknown dimension leaves the set untouched and yields an outcome
    /// with no changes.
    pub fn apply_filter(&mut self, dimension: DimensionId, value: FilterValue) -> FilterOutcome {
        let Some(dim) = self.dimensions.get_mut(dimension.0 as usize) else {
            return FilterOutcome {
                changed: Vec::new(),
                visible: self.visible_count(),
            };
        };
        dim.active = value;

        let mut changed = Vec::new();
        for index in 0..self.items.len() {
            let next = self.evaluate(&self.items[index]);
            if self.visibility[index] != next {
                self.visibility[index] = next;
                changed.push((index, next));
            }
        }
        FilterOutcome {
            changed,
            visible: self.visible_count(),
        }
    }

    /// Resets every dimension to [`FilterValue::All`].
    pub fn reset(&mut self) -> FilterOutcome {
        let mut changed = Vec::new();
        for dim in &mut self.dimensions {
            dim.active = FilterValue::All;
        }
        for (index, v) in self.visibility.iter_mut().enumerate() {
            if *v != Visibility::Shown {
                *v = Visibility::Shown;
                changed.push((index, Visibility::Shown));
            }
        }
        FilterOutcome {
            changed,
            visible: self.items.len(),
        }
    }

    fn evaluate(&self, item: &Item) -> Visibility {
        let mut result = Visibility::Shown;
        for (i, dim) in self.dimensions.iter().enumerate() {
            let id = DimensionId(u32::try_from(i).unwrap_or(u32::MAX));
            if dim.active.matches(item.tag(id)) {
                continue;
            }
            match dim.policy {
                Policy::Hide => return Visibility::Hidden,
                Policy::Dim => result = Visibility::Dimmed,
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(usize, Visibility)>,
        count: Option<usize>,
    }

    impl FilterPresenter for Recorder {
        fn set_visibility(&mut self, index: usize, visibility: Visibility) {
            self.calls.push((index, visibility));
        }

        fn set_visible_count(&mut self, count: usize) {
            self.count = Some(count);
        }
    }

    fn gallery(tags: &[&str]) -> (FilterSet, DimensionId) {
        let mut set = FilterSet::new();
        let category = set.add_dimension("category", Policy::Hide);
        for tag in tags {
            set.push_item(Item::new().with_tag(category, *tag));
        }
        (set, category)
    }

    #[test]
    fn all_shows_every_item() {
        let (mut set, category) = gallery(&["living", "bedroom", "kitchen"]);
        set.apply_filter(category, FilterValue::parse("kitchen"));
        let outcome = set.apply_filter(category, FilterValue::parse(ALL));
        assert_eq!(outcome.visible, 3);
        assert!((0..3).all(|i| set.visibility(i) == Some(Visibility::Shown)));
    }

    #[test]
    fn aba_scenario() {
        let (mut set, category) = gallery(&["A", "B", "A"]);
        let outcome = set.apply_filter(category, FilterValue::parse("A"));
        assert_eq!(outcome.visible, 2);
        assert_eq!(outcome.changed, [(1, Visibility::Hidden)]);
        assert_eq!(set.visibility(0), Some(Visibility::Shown));
        assert_eq!(set.visibility(2), Some(Visibility::Shown));

        let outcome = set.apply_filter(category, FilterValue::All);
        assert_eq!(outcome.visible, 3);
        assert_eq!(outcome.changed, [(1, Visibility::Shown)]);
    }

    #[test]
    fn specific_value_count_is_cardinality() {
        let tags = ["a", "b", "c", "a", "b", "a"];
        let (mut set, category) = gallery(&tags);
        for value in ["a", "b", "c", "d"] {
            let outcome = set.apply_filter(category, FilterValue::parse(value));
            let expected = tags.iter().filter(|t| **t == value).count();
            assert_eq!(outcome.visible, expected, "value {value}");
            for (i, tag) in tags.iter().enumerate() {
                let shown = set.visibility(i) == Some(Visibility::Shown);
                assert_eq!(shown, *tag == value);
            }
        }
    }

    #[test]
    fn untagged_item_only_matches_all() {
        let mut set = FilterSet::new();
        let category = set.add_dimension("category", Policy::Hide);
        set.push_item(Item::new());
        set.apply_filter(category, FilterValue::parse("sofa"));
        assert_eq!(set.visibility(0), Some(Visibility::Hidden));
    }

    #[test]
    fn dimensions_compose_conjunctively() {
        let mut set = FilterSet::new();
        let category = set.add_dimension("category", Policy::Hide);
        let color = set.add_dimension("color", Policy::Dim);
        set.push_item(Item::new().with_tag(category, "sofa").with_tag(color, "beige"));
        set.push_item(Item::new().with_tag(category, "sofa").with_tag(color, "grey"));
        set.push_item(Item::new().with_tag(category, "lamp").with_tag(color, "beige"));

        set.apply_filter(category, FilterValue::parse("sofa"));
        let outcome = set.apply_filter(color, FilterValue::parse("beige"));

        assert_eq!(set.visibility(0), Some(Visibility::Shown));
        assert_eq!(set.visibility(1), Some(Visibility::Dimmed));
        // Fails the hiding dimension even though the color matches.
        assert_eq!(set.visibility(2), Some(Visibility::Hidden));
        assert_eq!(outcome.visible, 1);
    }

    #[test]
    fn hide_wins_over_dim() {
        let mut set = FilterSet::new();
        let category = set.add_dimension("category", Policy::Hide);
        let color = set.add_dimension("color", Policy::Dim);
        set.push_item(Item::new().with_tag(category, "lamp").with_tag(color, "grey"));
        set.apply_filter(color, FilterValue::parse("beige"));
        assert_eq!(set.visibility(0), Some(Visibility::Dimmed));
        let outcome = set.apply_filter(category, FilterValue::parse("sofa"));
        assert_eq!(outcome.changed, [(0, Visibility::Hidden)]);
    }

    #[test]
    fn unknown_dimension_is_ignored() {
        let (mut set, _) = gallery(&["a", "b"]);
        let mut other = FilterSet::new();
        other.add_dimension("x", Policy::Hide);
        let stray = other.add_dimension("y", Policy::Hide);
        let outcome = set.apply_filter(stray, FilterValue::parse("a"));
        assert!(outcome.changed.is_empty());
        assert_eq!(outcome.visible, 2);
    }

    #[test]
    fn push_item_respects_active_selection() {
        let (mut set, category) = gallery(&["a"]);
        set.apply_filter(category, FilterValue::parse("a"));
        let idx = set.push_item(Item::new().with_tag(category, "b"));
        assert_eq!(set.visibility(idx), Some(Visibility::Hidden));
        assert_eq!(set.visible_count(), 1);
    }

    #[test]
    fn reset_restores_everything() {
        let (mut set, category) = gallery(&["a", "b", "b"]);
        set.apply_filter(category, FilterValue::parse("a"));
        let outcome = set.reset();
        assert_eq!(outcome.changed, [(1, Visibility::Shown), (2, Visibility::Shown)]);
        assert_eq!(set.selection(category), Some(&FilterValue::All));
    }

    #[test]
    fn outcome_drives_presenter() {
        let (mut set, category) = gallery(&["a", "b", "a"]);
        let mut recorder = Recorder::default();
        set.apply_filter(category, FilterValue::parse("b"))
            .present(&mut recorder);
        assert_eq!(
            recorder.calls,
            [(0, Visibility::Hidden), (2, Visibility::Hidden)]
        );
        assert_eq!(recorder.count, Some(1));
    }

    #[test]
    fn dimension_lookup_by_name() {
        let mut set = FilterSet::new();
        let color = set.add_dimension("color", Policy::Dim);
        assert_eq!(set.dimension("color"), Some(color));
        assert_eq!(set.dimension_name(color), Some("color"));
        assert_eq!(set.dimension("size"), None);
    }
}
