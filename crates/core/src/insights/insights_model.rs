//! Spending insight models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity bands for spending anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Low,
    Medium,
    High,
}

/// A per-(date, category) spend entry that deviates sharply from the
/// category's typical daily amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAnomaly {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    /// Standard deviations away from the category mean.
    pub z_score: f64,
    pub severity: AnomalySeverity,
    pub reason: String,
}
