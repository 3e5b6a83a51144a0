//! Bounded from/to price input pair.
//!
//! Each setter clamps against the opposite bound and the configured
//! floor/ceiling, so the pair can never be observed inverted after a setter.
//! [`PriceRangeInput::commit`] repairs the pair when an input loses focus.

use std::fmt;

use super::filter::PriceRange;

/// Default lowest selectable price.
pub const DEFAULT_PRICE_FLOOR: u32 = 100;

/// Default highest selectable price.
pub const DEFAULT_PRICE_CEILING: u32 = 45_000;

const PERMILLE: u64 = 1_000;

/// Which input of the pair is being committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The "from" input.
    From,
    /// The "to" input.
    To,
}

/// Receives the pair after every change.
pub trait PriceRangeListener {
    /// Called synchronously with the current bounds.
    fn price_changed(&self, range: PriceRange);
}

impl<F> PriceRangeListener for F
where
    F: Fn(PriceRange),
{
    fn price_changed(&self, range: PriceRange) {
        self(range);
    }
}

/// From/to price inputs constrained to `floor..=ceiling`.
pub struct PriceRangeInput {
    floor: u32,
    ceiling: u32,
    from: u32,
    to: u32,
    listener: Option<Box<dyn PriceRangeListener>>,
}

impl fmt::Debug for PriceRangeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceRangeInput")
            .field("floor", &self.floor)
            .field("ceiling", &self.ceiling)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl Default for PriceRangeInput {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_CEILING)
    }
}

impl PriceRangeInput {
    /// Creates the pair spanning `floor..=ceiling`.
    ///
    /// Swapped bounds are reordered.
    #[must_use]
    pub fn new(floor: u32, ceiling: u32) -> Self {
        let (low, high) = if floor <= ceiling {
            (floor, ceiling)
        } else {
            (ceiling, floor)
        };
        Self {
            floor: low,
            ceiling: high,
            from: low,
            to: high,
            listener: None,
        }
    }

    /// Registers the change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl PriceRangeListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Returns the current bounds.
    #[must_use]
    pub const fn range(&self) -> PriceRange {
        PriceRange::new(self.from, self.to)
    }

    /// Returns the configured floor.
    #[must_use]
    pub const fn floor(&self) -> u32 {
        self.floor
    }

    /// Returns the configured ceiling.
    #[must_use]
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Sets the lower bound, clamped into `floor..=to`.
    pub fn set_from(&mut self, value: u32) -> PriceRange {
        self.from = value.min(self.to).max(self.floor);
        self.notify();
        self.range()
    }

    /// Sets the upper bound, clamped into `from..=ceiling`.
    pub fn set_to(&mut self, value: u32) -> PriceRange {
        self.to = value.max(self.from).min(self.ceiling);
        self.notify();
        self.range()
    }

    /// Repairs the pair when `bound` loses focus.
    ///
    /// If the pair is inverted, the committed bound is pulled to the other
    /// one. Nothing happens, and nobody is notified, when the pair is valid.
    pub fn commit(&mut self, bound: Bound) -> PriceRange {
        if self.from > self.to {
            match bound {
                Bound::From => self.from = self.to,
                Bound::To => self.to = self.from,
            }
            tracing::trace!(?bound, from = self.from, to = self.to, "repaired price range");
            self.notify();
        }
        self.range()
    }

    /// Slider fill as `(left, right)` offsets in permille of the full span.
    #[must_use]
    pub fn track_span(&self) -> (u64, u64) {
        let span = u64::from(self.ceiling - self.floor);
        let offset = |value: u32| {
            (u64::from(value.saturating_sub(self.floor)) * PERMILLE)
                .checked_div(span)
                .unwrap_or(0)
                .min(PERMILLE)
        };
        let left = offset(self.from);
        let right = PERMILLE - offset(self.to).max(left);
        (left, right)
    }

    fn notify(&self) {
        if let Some(listener) = self.listener.as_deref() {
            listener.price_changed(self.range());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::below_floor(10, 100)]
    #[case::inside(2_000, 2_000)]
    #[case::above_to(50_000, 45_000)]
    fn set_from_clamps_into_floor_and_to(#[case] value: u32, #[case] expected: u32) {
        let mut input = PriceRangeInput::default();
        assert_eq!(input.set_from(value).min, expected);
    }

    #[rstest]
    fn set_from_above_current_to_yields_to() {
        let mut input = PriceRangeInput::default();
        input.set_to(500);
        let range = input.set_from(900);
        assert_eq!(range, PriceRange::new(500, 500));
        assert!(range.min <= range.max);
    }

    #[rstest]
    #[case::below_from(50, 300)]
    #[case::inside(1_000, 1_000)]
    #[case::above_ceiling(90_000, 45_000)]
    fn set_to_clamps_into_from_and_ceiling(#[case] value: u32, #[case] expected: u32) {
        let mut input = PriceRangeInput::default();
        input.set_from(300);
        assert_eq!(input.set_to(value).max, expected);
    }

    #[rstest]
    fn commit_on_valid_pair_changes_nothing() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut input = PriceRangeInput::default()
            .with_listener(move |range: PriceRange| sink.borrow_mut().push(range));

        input.set_from(200);
        let committed = input.commit(Bound::From);

        assert_eq!(committed, PriceRange::new(200, 45_000));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[rstest]
    fn commit_pulls_committed_bound_when_inverted() {
        let mut input = PriceRangeInput::new(0, 100);
        input.from = 80;
        input.to = 20;
        assert_eq!(input.commit(Bound::From), PriceRange::new(20, 20));

        input.from = 80;
        input.to = 20;
        assert_eq!(input.commit(Bound::To), PriceRange::new(80, 80));
    }

    #[rstest]
    fn swapped_limits_are_reordered() {
        let input = PriceRangeInput::new(500, 10);
        assert_eq!((input.floor(), input.ceiling()), (10, 500));
    }

    #[rstest]
    #[case::full(0, 1_000, (0, 0))]
    #[case::middle(250, 750, (250, 250))]
    #[case::collapsed(1_000, 1_000, (1_000, 0))]
    fn track_span_reports_permille_offsets(
        #[case] from: u32,
        #[case] to: u32,
        #[case] expected: (u64, u64),
    ) {
        let mut input = PriceRangeInput::new(0, 1_000);
        input.set_to(to);
        input.set_from(from);
        assert_eq!(input.track_span(), expected);
    }

    #[rstest]
    fn track_span_handles_zero_width() {
        let input = PriceRangeInput::new(100, 100);
        assert_eq!(input.track_span(), (0, 1_000));
    }
}
