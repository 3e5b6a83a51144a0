//! Removable chips summarising the active filters.

use std::collections::btree_set;
use std::fmt;

use super::filter::ProductFilters;

/// The kind of filter a chip represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    /// A selected category.
    Category,
    /// A selected brand.
    Brand,
    /// A selected availability label.
    Availability,
    /// The minimum rating.
    Rating,
}

/// One active filter value, borrowed from the filters it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveChip<'a> {
    /// A selected category name.
    Category(&'a str),
    /// A selected brand name.
    Brand(&'a str),
    /// A selected availability label.
    Availability(&'a str),
    /// A non-zero minimum rating.
    Rating(u8),
}

impl ActiveChip<'_> {
    /// Returns the kind of filter this chip represents.
    #[must_use]
    pub const fn kind(&self) -> ChipKind {
        match self {
            Self::Category(_) => ChipKind::Category,
            Self::Brand(_) => ChipKind::Brand,
            Self::Availability(_) => ChipKind::Availability,
            Self::Rating(_) => ChipKind::Rating,
        }
    }

    /// Returns the owned removal action for this chip.
    #[must_use]
    pub fn removal(&self) -> FilterRemoval {
        match *self {
            Self::Category(name) => FilterRemoval::Category(name.to_owned()),
            Self::Brand(name) => FilterRemoval::Brand(name.to_owned()),
            Self::Availability(label) => FilterRemoval::Availability(label.to_owned()),
            Self::Rating(_) => FilterRemoval::Rating,
        }
    }
}

impl fmt::Display for ActiveChip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(value) | Self::Brand(value) | Self::Availability(value) => {
                f.write_str(value)
            }
            Self::Rating(stars) => write!(f, "{stars} stars & up"),
        }
    }
}

/// Removes the value behind a chip from a selection.
///
/// Removing a value that is no longer selected leaves the selection as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRemoval {
    /// Drop a category.
    Category(String),
    /// Drop a brand.
    Brand(String),
    /// Drop an availability label.
    Availability(String),
    /// Clear the rating filter.
    Rating,
}

/// Lazy iterator over the chips of a [`ProductFilters`].
///
/// Yields categories, then brands, then availability labels, then the rating
/// chip when a rating is set.
#[derive(Debug, Clone)]
pub struct ActiveChips<'a> {
    categories: btree_set::Iter<'a, String>,
    brands: btree_set::Iter<'a, String>,
    availability: Option<btree_set::Iter<'a, String>>,
    rating: Option<u8>,
}

impl<'a> ActiveChips<'a> {
    pub(super) fn new(filters: &'a ProductFilters) -> Self {
        Self {
            categories: filters.categories.iter(),
            brands: filters.brands.iter(),
            availability: filters.availability.as_ref().map(btree_set::BTreeSet::iter),
            rating: (filters.rating > 0).then_some(filters.rating),
        }
    }
}

impl<'a> Iterator for ActiveChips<'a> {
    type Item = ActiveChip<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(name) = self.categories.next() {
            return Some(ActiveChip::Category(name));
        }
        if let Some(name) = self.brands.next() {
            return Some(ActiveChip::Brand(name));
        }
        if let Some(label) = self.availability.as_mut().and_then(Iterator::next) {
            return Some(ActiveChip::Availability(label));
        }
        self.rating.take().map(ActiveChip::Rating)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.categories.len()
            + self.brands.len()
            + self.availability.as_ref().map_or(0, ExactSizeIterator::len)
            + usize::from(self.rating.is_some());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ActiveChips<'_> {}
