//! Pure scenario math: action validation and spend-map rewrites.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::ledger::CategorySpendMap;

use super::simulation_model::{ActionError, SpendingChange};

const ONE_HUNDRED: Decimal = dec!(100);

/// Rejects malformed change values. A change with neither field set is a
/// valid no-op, not an error.
pub fn validate_change(change: &SpendingChange) -> Result<(), ActionError> {
    if let Some(percent) = change.percent {
        if percent <= Decimal::ZERO || percent > ONE_HUNDRED {
            return Err(ActionError::InvalidPercentage(percent));
        }
    }

    if let Some(amount) = change.amount {
        if amount <= Decimal::ZERO {
            return Err(ActionError::InvalidAmount(amount));
        }
    }

    Ok(())
}

/// Applies a spending change to a copy of the spend map.
///
/// Percentage cuts scale every entry of the target category. Fixed cuts are
/// spread evenly across the category's dates and move each entry toward
/// zero, clamping there rather than flipping sign. Entries are
/// display-rounded after the cut. Unknown categories and empty changes
/// return an untouched copy, and `percent` wins when both fields are set.
pub fn apply_change(spend: &CategorySpendMap, change: &SpendingChange) -> CategorySpendMap {
    let mut modified = spend.clone();

    let entries = match modified.get_mut(&change.category) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return modified,
    };

    if let Some(percent) = change.percent {
        let factor = Decimal::ONE - percent / ONE_HUNDRED;
        for amount in entries.values_mut() {
            *amount = (*amount * factor).round_dp(DISPLAY_DECIMAL_PRECISION);
        }
    } else if let Some(total_reduction) = change.amount {
        let per_date = total_reduction / Decimal::from(entries.len());
        for amount in entries.values_mut() {
            *amount = reduce_toward_zero(*amount, per_date);
        }
    }

    modified
}

/// Shrinks `value` by `reduction` in absolute terms, stopping at zero.
fn reduce_toward_zero(value: Decimal, reduction: Decimal) -> Decimal {
    let moved = if value < Decimal::ZERO {
        (value + reduction).min(Decimal::ZERO)
    } else {
        (value - reduction).max(Decimal::ZERO)
    };

    moved.round_dp(DISPLAY_DECIMAL_PRECISION)
}
