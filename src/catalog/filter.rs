//! Product filter selection and its change listener.
//!
//! [`ProductFilters`] is the single canonical record of what the shopper has
//! selected. Every update is a pure function returning a new value;
//! [`FilterState`] owns the current value for one view and notifies an
//! optional [`FilterListener`] synchronously after each update so the owning
//! view can re-fetch or re-render the product list.

use std::collections::BTreeSet;
use std::fmt;

use super::chips::{ActiveChips, FilterRemoval};
use super::error::CatalogError;

/// Price ceiling used when a view does not configure one.
pub const DEFAULT_PRICE_CEILING: u32 = 1_000;

/// Highest selectable star rating.
pub const MAX_RATING: u8 = 5;

/// How a category click changes the category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryMode {
    /// Checkbox behaviour: add the category, or remove it when selected.
    #[default]
    Multi,
    /// Radio behaviour: the clicked category replaces the selection.
    Single,
}

/// Capabilities offered by the view that owns a [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Upper bound of the price range.
    pub price_ceiling: u32,
    /// Category selection behaviour.
    pub category_mode: CategoryMode,
    /// Whether the view offers availability checkboxes.
    pub availability: bool,
    /// Whether the view offers a free-text search field.
    pub search: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_ceiling: DEFAULT_PRICE_CEILING,
            category_mode: CategoryMode::Multi,
            availability: true,
            search: true,
        }
    }
}

impl FilterConfig {
    /// Sets the price ceiling.
    #[must_use]
    pub const fn with_price_ceiling(mut self, price_ceiling: u32) -> Self {
        self.price_ceiling = price_ceiling;
        self
    }

    /// Sets the category selection behaviour.
    #[must_use]
    pub const fn with_category_mode(mut self, category_mode: CategoryMode) -> Self {
        self.category_mode = category_mode;
        self
    }

    /// Enables or disables the availability capability.
    #[must_use]
    pub const fn with_availability(mut self, enabled: bool) -> Self {
        self.availability = enabled;
        self
    }

    /// Enables or disables the search capability.
    #[must_use]
    pub const fn with_search(mut self, enabled: bool) -> Self {
        self.search = enabled;
        self
    }
}

/// Inclusive price bounds in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
}

impl PriceRange {
    /// Creates a range without validating the bounds.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// The unfiltered range `0..=ceiling`.
    #[must_use]
    pub const fn full(ceiling: u32) -> Self {
        Self::new(0, ceiling)
    }

    /// Returns true when the range does not narrow anything.
    #[must_use]
    pub const fn is_full(&self, ceiling: u32) -> bool {
        self.min == 0 && self.max >= ceiling
    }
}

/// Quick-pick price buttons shown under the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePreset {
    /// Everything under 25.
    Under25,
    /// 25 to 50.
    From25To50,
    /// 50 to 100.
    From50To100,
    /// Slider position: anything up to the given maximum.
    UpTo(u32),
}

impl PricePreset {
    /// The buttons in display order.
    pub const BUTTONS: [Self; 3] = [Self::Under25, Self::From25To50, Self::From50To100];

    /// Returns the range this preset selects.
    #[must_use]
    pub const fn range(self) -> PriceRange {
        match self {
            Self::Under25 => PriceRange::new(0, 25),
            Self::From25To50 => PriceRange::new(25, 50),
            Self::From50To100 => PriceRange::new(50, 100),
            Self::UpTo(max) => PriceRange::new(0, max),
        }
    }

    /// Returns the button caption.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Under25 => "Under $25".to_owned(),
            Self::From25To50 => "$25 to $50".to_owned(),
            Self::From50To100 => "$50 to $100".to_owned(),
            Self::UpTo(max) => format!("Up to ${max}"),
        }
    }
}

/// The shopper's current filter selection.
///
/// `availability` and `search` are `None` when the owning view does not offer
/// those capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilters {
    /// Selected category names.
    pub categories: BTreeSet<String>,
    /// Selected brand names.
    pub brands: BTreeSet<String>,
    /// Selected availability labels, when offered.
    pub availability: Option<BTreeSet<String>>,
    /// Selected price bounds.
    pub price_range: PriceRange,
    /// Minimum star rating; `0` disables the rating filter.
    pub rating: u8,
    /// Free-text search, when offered.
    pub search: Option<String>,
}

impl ProductFilters {
    /// Returns the default selection for a view with the given capabilities.
    #[must_use]
    pub fn defaults(config: &FilterConfig) -> Self {
        Self {
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            availability: config.availability.then(BTreeSet::new),
            price_range: PriceRange::full(config.price_ceiling),
            rating: 0,
            search: config.search.then(String::new),
        }
    }

    /// Applies a category click according to `mode`.
    #[must_use]
    pub fn with_category_toggled(mut self, name: &str, mode: CategoryMode) -> Self {
        self.categories = match mode {
            CategoryMode::Multi => toggle_multi(self.categories, name),
            CategoryMode::Single => set_single(self.categories, name),
        };
        self
    }

    /// Adds or removes a brand.
    #[must_use]
    pub fn with_brand_toggled(mut self, name: &str) -> Self {
        self.brands = toggle_multi(self.brands, name);
        self
    }

    /// Adds or removes an availability label.
    ///
    /// Leaves the value unchanged when availability is not offered.
    #[must_use]
    pub fn with_availability_toggled(mut self, label: &str) -> Self {
        self.availability = self
            .availability
            .map(|selection| toggle_multi(selection, label));
        self
    }

    /// Replaces the rating, clamping it to [`MAX_RATING`].
    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating.min(MAX_RATING);
        self
    }

    /// Replaces the price range without validation.
    #[must_use]
    pub const fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    /// Replaces the search text.
    ///
    /// Leaves the value unchanged when search is not offered.
    #[must_use]
    pub fn with_search(mut self, text: &str) -> Self {
        if let Some(search) = self.search.as_mut() {
            text.clone_into(search);
        }
        self
    }

    /// Removes the value a chip stands for; absent values are left alone.
    #[must_use]
    pub fn without(mut self, removal: &FilterRemoval) -> Self {
        match removal {
            FilterRemoval::Category(name) => {
                self.categories.remove(name);
            }
            FilterRemoval::Brand(name) => {
                self.brands.remove(name);
            }
            FilterRemoval::Availability(label) => {
                if let Some(selection) = self.availability.as_mut() {
                    selection.remove(label);
                }
            }
            FilterRemoval::Rating => self.rating = 0,
        }
        self
    }

    /// Iterates the active filter chips.
    ///
    /// The iterator is lazy and can be restarted by calling this again or by
    /// cloning it before consumption.
    #[must_use]
    pub fn chips(&self) -> ActiveChips<'_> {
        ActiveChips::new(self)
    }

    /// Counts the active filter chips.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.chips().count()
    }
}

/// Checkbox toggle: removes `name` when selected, adds it otherwise.
///
/// Applying it twice with the same name returns the original selection.
#[must_use]
pub fn toggle_multi(mut selection: BTreeSet<String>, name: &str) -> BTreeSet<String> {
    if !selection.remove(name) {
        selection.insert(name.to_owned());
    }
    selection
}

/// Radio selection: replaces the whole selection with `{name}`.
#[must_use]
pub fn set_single(mut selection: BTreeSet<String>, name: &str) -> BTreeSet<String> {
    selection.clear();
    selection.insert(name.to_owned());
    selection
}

/// Receives the new selection after every [`FilterState`] update.
pub trait FilterListener {
    /// Called synchronously with the updated filters.
    fn filters_changed(&self, filters: &ProductFilters);
}

impl<F> FilterListener for F
where
    F: Fn(&ProductFilters),
{
    fn filters_changed(&self, filters: &ProductFilters) {
        self(filters);
    }
}

/// Filter selection owned by a single view.
pub struct FilterState {
    config: FilterConfig,
    filters: ProductFilters,
    listener: Option<Box<dyn FilterListener>>,
}

impl fmt::Debug for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterState")
            .field("config", &self.config)
            .field("filters", &self.filters)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl FilterState {
    /// Creates the default selection for a view with the given capabilities.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self {
            filters: ProductFilters::defaults(&config),
            config,
            listener: None,
        }
    }

    /// Registers the change listener, replacing any previous one.
    #[must_use]
    pub fn with_listener(mut self, listener: impl FilterListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Returns the view capabilities.
    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    /// Applies a category click using the configured [`CategoryMode`].
    pub fn toggle_category(&mut self, name: &str) -> &ProductFilters {
        let mode = self.config.category_mode;
        self.update(|filters| filters.with_category_toggled(name, mode))
    }

    /// Adds or removes a brand.
    pub fn toggle_brand(&mut self, name: &str) -> &ProductFilters {
        self.update(|filters| filters.with_brand_toggled(name))
    }

    /// Adds or removes an availability label.
    pub fn toggle_availability(&mut self, label: &str) -> &ProductFilters {
        if !self.config.availability {
            tracing::debug!(label, "availability filter not offered by this view");
        }
        self.update(|filters| filters.with_availability_toggled(label))
    }

    /// Replaces the rating; `0` clears the rating filter.
    pub fn set_rating(&mut self, rating: u8) -> &ProductFilters {
        self.update(|filters| filters.with_rating(rating))
    }

    /// Replaces the price range without validation.
    pub fn set_price_range(&mut self, min: u32, max: u32) -> &ProductFilters {
        self.update(|filters| filters.with_price_range(PriceRange::new(min, max)))
    }

    /// Replaces the price range after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRange`] when `min > max` or `max`
    /// exceeds the configured ceiling. The selection is left unchanged and
    /// the listener is not called.
    pub fn try_set_price_range(&mut self, min: u32, max: u32) -> Result<&ProductFilters, CatalogError> {
        let ceiling = self.config.price_ceiling;
        if min > max || max > ceiling {
            return Err(CatalogError::InvalidRange { min, max, ceiling });
        }
        Ok(self.set_price_range(min, max))
    }

    /// Selects the range of a price preset.
    pub fn apply_preset(&mut self, preset: PricePreset) -> &ProductFilters {
        let range = preset.range();
        self.set_price_range(range.min, range.max)
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, text: &str) -> &ProductFilters {
        self.update(|filters| filters.with_search(text))
    }

    /// Removes the value behind a chip.
    pub fn remove(&mut self, removal: &FilterRemoval) -> &ProductFilters {
        self.update(|filters| filters.without(removal))
    }

    /// Restores the default selection.
    pub fn reset(&mut self) -> &ProductFilters {
        let config = self.config;
        self.update(|_| ProductFilters::defaults(&config))
    }

    fn update(&mut self, apply: impl FnOnce(ProductFilters) -> ProductFilters) -> &ProductFilters {
        let current = std::mem::take(&mut self.filters);
        self.filters = apply(current);
        if let Some(listener) = self.listener.as_deref() {
            listener.filters_changed(&self.filters);
        }
        &self.filters
    }
}

/// Returns the options whose names contain `query`.
///
/// Matching is case-insensitive and ignores surrounding whitespace on both
/// sides. A blank query matches everything.
pub fn matching_options<'a, I>(options: I, query: &str) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    options
        .into_iter()
        .filter(move |option| option.trim().to_lowercase().contains(needle.as_str()))
}
