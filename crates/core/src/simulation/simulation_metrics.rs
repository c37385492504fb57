//! Before/after forecast measurements.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::forecast::Forecast;

use super::simulation_model::{BufferImprovement, SimulationMetrics};

/// 1-based index of the first negative balance, `None` when the series
/// never goes negative.
pub fn first_negative_day(balances: &[Decimal]) -> Option<usize> {
    balances
        .iter()
        .position(|balance| *balance < Decimal::ZERO)
        .map(|idx| idx + 1)
}

/// Measures the simulated forecast against the baseline.
pub fn evaluate(before: &Forecast, after: &Forecast) -> SimulationMetrics {
    let before_first_negative_day = first_negative_day(&before.balances);
    let after_first_negative_day = first_negative_day(&after.balances);

    let improvement = match (before_first_negative_day, after_first_negative_day) {
        (Some(before_day), Some(after_day)) => {
            BufferImprovement::Shifted(after_day as i64 - before_day as i64)
        }
        (Some(_), None) => BufferImprovement::Cleared,
        (None, Some(_)) => BufferImprovement::Regressed,
        (None, None) => BufferImprovement::Unchanged,
    };

    let delta_final_balance = match (before.final_balance(), after.final_balance()) {
        (Some(before_final), Some(after_final)) => {
            (after_final - before_final).round_dp(DISPLAY_DECIMAL_PRECISION)
        }
        _ => Decimal::ZERO,
    };

    SimulationMetrics {
        before_first_negative_day,
        after_first_negative_day,
        improvement,
        delta_final_balance,
    }
}

/// One-sentence summary served alongside the raw metrics.
pub fn summarize(metrics: &SimulationMetrics) -> String {
    let delta = metrics.delta_final_balance;
    let balance_clause = if delta < Decimal::ZERO {
        format!("lower the final balance by ${}", delta.abs())
    } else {
        format!("improve the final balance by ${}", delta)
    };

    let buffer_clause = match metrics.improvement {
        BufferImprovement::Shifted(days) if days < 0 => {
            format!("pull the first negative balance {} days earlier", -days)
        }
        BufferImprovement::Shifted(days) => {
            format!("delay the first negative balance by {} days", days)
        }
        BufferImprovement::Cleared => "clear the projected negative balance".to_string(),
        BufferImprovement::Regressed => "introduce a projected negative balance".to_string(),
        BufferImprovement::Unchanged => "keep the projected balance non-negative".to_string(),
    };

    format!("This action would {} and {}.", buffer_clause, balance_clause)
}
