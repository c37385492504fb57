//! Smoothed moving-average balance projection.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, JUMP_DAMPING_FLOOR, JUMP_DAMPING_RATIO, MOVING_AVERAGE_WINDOW,
};
use crate::ledger::DailyBalance;

use super::forecast_model::{Forecast, ForecastMethod};

/// Projects `horizon` daily balances past the end of `history`.
///
/// Each step averages the trailing window of the working sequence, where the
/// working sequence is the history plus the raw (undamped) means of earlier
/// steps. The emitted value is damped against the previously emitted value
/// and rounded for display; the raw mean is what feeds later windows. The
/// i-th projected date is the last historical date plus `i + 1` days, so a
/// gap before `today` is not skipped over.
///
/// `history` must be ascending by date. An empty history projects flat zeros
/// anchored at `today`; a zero horizon yields an empty forecast.
pub fn project_moving_average(
    history: &[DailyBalance],
    horizon: usize,
    today: NaiveDate,
) -> Forecast {
    let anchor = history.last().map(|entry| entry.date).unwrap_or(today);

    let mut working: Vec<Decimal> = history.iter().map(|entry| entry.balance).collect();
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(horizon);
    let mut balances: Vec<Decimal> = Vec::with_capacity(horizon);

    for step in 0..horizon {
        let mean = trailing_mean(&working);
        let date = anchor + Duration::days(step as i64 + 1);

        let mut value = mean;
        if let Some(prev) = balances.last() {
            value = damp_jump(*prev, value);
        }

        dates.push(date);
        balances.push(value.round_dp(DISPLAY_DECIMAL_PRECISION));
        working.push(mean);
    }

    Forecast {
        dates,
        balances,
        method: ForecastMethod::MovingAverage,
    }
}

/// Mean of the trailing window, zero when the sequence is empty.
fn trailing_mean(working: &[Decimal]) -> Decimal {
    let start = working.len().saturating_sub(MOVING_AVERAGE_WINDOW);
    let window = &working[start..];
    if window.is_empty() {
        return Decimal::ZERO;
    }

    let sum: Decimal = window.iter().sum();
    sum / Decimal::from(window.len())
}

/// Clamps `value` so it moves at most `max(floor, |prev| * ratio)` away from
/// the previously emitted balance.
fn damp_jump(prev: Decimal, value: Decimal) -> Decimal {
    let jump = value - prev;
    let threshold = JUMP_DAMPING_FLOOR.max(prev.abs() * JUMP_DAMPING_RATIO);

    if jump.abs() > threshold {
        if jump.is_sign_negative() {
            prev - threshold
        } else {
            prev + threshold
        }
    } else {
        value
    }
}
