//! Behavioural tests for the product filter state.

use std::cell::Cell;
use std::rc::Rc;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use storefront::catalog::{FilterConfig, FilterRemoval, FilterState, ProductFilters};

#[derive(ScenarioState, Default)]
struct PanelState {
    filters: Slot<FilterState>,
    updates: Slot<Rc<Cell<usize>>>,
}

#[fixture]
fn panel_state() -> PanelState {
    PanelState::default()
}

fn with_filters<T>(
    panel_state: &PanelState,
    action: impl FnOnce(&mut FilterState) -> T,
) -> Result<T, String> {
    let mut state = panel_state
        .filters
        .take()
        .ok_or_else(|| "filter panel not initialised".to_owned())?;
    let result = action(&mut state);
    panel_state.filters.set(state);
    Ok(result)
}

fn chip_line(filters: &ProductFilters) -> String {
    filters
        .chips()
        .map(|chip| chip.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[given("a filter panel with a price ceiling of {ceiling:u32}")]
fn filter_panel(panel_state: &PanelState, ceiling: u32) {
    let updates = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&updates);
    let state = FilterState::new(FilterConfig::default().with_price_ceiling(ceiling))
        .with_listener(move |_: &ProductFilters| counter.set(counter.get() + 1));
    panel_state.filters.set(state);
    panel_state.updates.set(updates);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the shopper toggles category {name}")]
fn toggle_category(panel_state: &PanelState, name: String) -> Result<(), String> {
    with_filters(panel_state, |state| {
        state.toggle_category(name.trim_matches('"'));
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the shopper toggles brand {name}")]
fn toggle_brand(panel_state: &PanelState, name: String) -> Result<(), String> {
    with_filters(panel_state, |state| {
        state.toggle_brand(name.trim_matches('"'));
    })
}

#[when("the shopper sets a minimum rating of {rating:u8}")]
fn set_rating(panel_state: &PanelState, rating: u8) -> Result<(), String> {
    with_filters(panel_state, |state| {
        state.set_rating(rating);
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the shopper removes the category chip {name}")]
fn remove_category_chip(panel_state: &PanelState, name: String) -> Result<(), String> {
    let removal = FilterRemoval::Category(name.trim_matches('"').to_owned());
    with_filters(panel_state, |state| {
        state.remove(&removal);
    })
}

#[when("the shopper tries the price range {min:u32} to {max:u32}")]
fn try_price_range(panel_state: &PanelState, min: u32, max: u32) -> Result<(), String> {
    let outcome = with_filters(panel_state, |state| {
        state.try_set_price_range(min, max).map(|_| ())
    })?;
    if outcome.is_err() {
        Ok(())
    } else {
        Err(format!("expected {min} to {max} to be rejected"))
    }
}

#[when("the shopper resets the filters")]
fn reset_filters(panel_state: &PanelState) -> Result<(), String> {
    with_filters(panel_state, |state| {
        state.reset();
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the chips read {expected}")]
fn assert_chips(panel_state: &PanelState, expected: String) -> Result<(), String> {
    let expected_line = expected.trim_matches('"');
    let actual = with_filters(panel_state, |state| chip_line(state.filters()))?;
    if actual == expected_line {
        Ok(())
    } else {
        Err(format!("expected chips {expected_line} but found {actual}"))
    }
}

#[then("no chips are shown")]
fn assert_no_chips(panel_state: &PanelState) -> Result<(), String> {
    let count = with_filters(panel_state, |state| state.filters().active_count())?;
    if count == 0 {
        Ok(())
    } else {
        Err(format!("expected no chips but found {count}"))
    }
}

#[then("the price range is {min:u32} to {max:u32}")]
fn assert_price_range(panel_state: &PanelState, min: u32, max: u32) -> Result<(), String> {
    let range = with_filters(panel_state, |state| state.filters().price_range)?;
    if (range.min, range.max) == (min, max) {
        Ok(())
    } else {
        Err(format!(
            "expected price range {min} to {max} but found {} to {}",
            range.min, range.max
        ))
    }
}

#[then("the listener has seen {count:usize} updates")]
fn assert_updates(panel_state: &PanelState, count: usize) -> Result<(), String> {
    let actual = panel_state
        .updates
        .with_ref(|updates| updates.get())
        .ok_or_else(|| "listener counter missing".to_owned())?;
    if actual == count {
        Ok(())
    } else {
        Err(format!("expected {count} updates but saw {actual}"))
    }
}

#[scenario(path = "tests/features/filter_state.feature", index = 0)]
fn chips_follow_selection_order(panel_state: PanelState) {
    let _ = panel_state;
}

#[scenario(path = "tests/features/filter_state.feature", index = 1)]
fn removing_a_chip_clears_only_that_filter(panel_state: PanelState) {
    let _ = panel_state;
}

#[scenario(path = "tests/features/filter_state.feature", index = 2)]
fn inverted_price_ranges_are_rejected(panel_state: PanelState) {
    let _ = panel_state;
}

#[scenario(path = "tests/features/filter_state.feature", index = 3)]
fn reset_restores_defaults(panel_state: PanelState) {
    let _ = panel_state;
}
