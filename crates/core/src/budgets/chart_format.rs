//! Display formatting for chart values and cost amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::{CHART_DISPLAY_PRECISION, COST_DISPLAY_PRECISION, CURRENCY_SYMBOL};

fn round_for_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount in whole currency units, e.g. `$100`.
pub fn format_whole_amount(value: Decimal) -> String {
    format!(
        "{}{}",
        CURRENCY_SYMBOL,
        round_for_display(value, CHART_DISPLAY_PRECISION)
    )
}

/// Formats an amount with cents, e.g. `$12.50`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_for_display(value, COST_DISPLAY_PRECISION);
    rounded.rescale(COST_DISPLAY_PRECISION);
    format!("{}{}", CURRENCY_SYMBOL, rounded)
}

/// Percentage base used for display. Zero and negative bases become 1 so
/// that an empty ring reads 0% instead of failing.
pub fn percentage_base(total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        total
    } else {
        Decimal::ONE
    }
}

/// Share of `value` in `base` as a whole-number percentage.
pub fn percentage_of(value: Decimal, base: Decimal) -> Decimal {
    value
        .checked_div(percentage_base(base))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|pct| round_for_display(pct, CHART_DISPLAY_PRECISION))
        .unwrap_or(Decimal::ZERO)
}

/// Formats a slice value with its share of `base`, e.g. `$100 (50%)`.
pub fn format_slice_value(value: Decimal, base: Decimal) -> String {
    format!(
        "{} ({}%)",
        format_whole_amount(value),
        percentage_of(value, base)
    )
}

/// `Paid: $50.00 / Goal: $100.00`
pub fn format_cost_progress(paid: Decimal, goal: Decimal) -> String {
    format!("Paid: {} / Goal: {}", format_amount(paid), format_amount(goal))
}
