//! Scenario simulation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forecast::Forecast;

/// Subjective risk attached to a recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    #[serde(alias = "med")]
    Medium,
    High,
}

/// The ledger change a scenario applies to one category.
///
/// `percent` and `amount` are alternatives; `percent` wins when both are
/// present. A change naming no category, or a category absent from the
/// ledger, simulates as a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpendingChange {
    #[serde(default)]
    pub category: String,
    /// Percentage cut in (0, 100], applied to every entry of the category.
    #[serde(default, rename = "pct", skip_serializing_if = "Option::is_none")]
    pub percent: Option<Decimal>,
    /// Fixed amount, distributed evenly across the category's dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl SpendingChange {
    pub fn percentage(category: impl Into<String>, percent: Decimal) -> Self {
        Self {
            category: category.into(),
            percent: Some(percent),
            amount: None,
        }
    }

    pub fn fixed(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            percent: None,
            amount: Some(amount),
        }
    }
}

/// A savings action that can be simulated against a user's ledger.
///
/// Everything besides `change` is descriptive: it is carried through for
/// display but never influences the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAction {
    pub id: String,
    pub title: String,
    pub change: SpendingChange,
    /// Days-of-buffer estimate attached by the recommender, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_gain_days: Option<i64>,
    pub risk: RiskLevel,
    pub explanation: String,
}

/// Validation failures for scenario actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Percentage cuts must be within (0, 100].
    #[error("Percentage must be greater than 0 and at most 100, got {0}")]
    InvalidPercentage(Decimal),

    /// Fixed cuts must be positive.
    #[error("Amount must be greater than 0, got {0}")]
    InvalidAmount(Decimal),
}

/// Movement of the first projected shortfall day between the baseline and
/// the simulated forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "camelCase")]
pub enum BufferImprovement {
    /// Both runs go negative; positive days mean the shortfall moved later.
    Shifted(i64),
    /// The baseline goes negative, the simulated run never does.
    Cleared,
    /// Only the simulated run goes negative.
    Regressed,
    /// Neither run goes negative.
    Unchanged,
}

/// Consistent before/after measurements for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    /// 1-based day index of the first negative baseline balance.
    pub before_first_negative_day: Option<usize>,
    /// 1-based day index of the first negative simulated balance.
    pub after_first_negative_day: Option<usize>,
    pub improvement: BufferImprovement,
    /// Final simulated balance minus final baseline balance.
    pub delta_final_balance: Decimal,
}

/// Outcome of simulating one action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub before: Forecast,
    pub after: Forecast,
    pub metrics: SimulationMetrics,
    /// One-sentence summary of the metrics.
    pub explanation: String,
}
