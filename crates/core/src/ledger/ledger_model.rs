//! Ledger domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::UNCATEGORIZED;

/// Domain model representing a single ledger transaction.
///
/// Amounts follow the ledger sign convention: expenses are negative, income
/// and refunds are positive. Records are immutable once persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub user_id: String,
    /// Calendar day the transaction settled.
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

impl TransactionRecord {
    /// Builds a record with a generated id. Absent or blank categories fall
    /// back to the shared uncategorized bucket.
    pub fn new(
        user_id: impl Into<String>,
        date: NaiveDate,
        category: Option<String>,
        amount: Decimal,
    ) -> Self {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            date,
            category,
            amount,
        }
    }
}

/// One summed spend entry per (date, category) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpendRow {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

/// Net ledger movement for one calendar day, negated so that spending-heavy
/// days read as positive balances for downstream projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Aggregated spend for one category across the whole ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub total: Decimal,
    pub count: i64,
}
