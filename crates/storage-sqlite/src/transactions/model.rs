//! Database models for ledger transactions.

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use flowcast_core::constants::UNCATEGORIZED;
use flowcast_core::ledger::TransactionRecord;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Helper function to parse a string into a Decimal,
/// with a fallback for scientific notation by parsing as f64 first.
pub(crate) fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::error!(
                        "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                        field_name,
                        value_str,
                        f_val
                    );
                    Decimal::ZERO
                }
            },
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses a `%Y-%m-%d` date string, falling back to today on bad data.
pub(crate) fn parse_date_string_tolerant(value_str: &str, field_name: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value_str, DATE_FORMAT).unwrap_or_else(|e| {
        log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
        Utc::now().date_naive()
    })
}

/// Database model for ledger transactions
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub txn_date: String,
    pub category: Option<String>,
    pub amount: String,
    pub created_at: String,
}

// Conversion to domain models

impl From<TransactionDB> for TransactionRecord {
    fn from(db: TransactionDB) -> Self {
        let category = db
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        Self {
            id: db.id,
            user_id: db.user_id,
            date: parse_date_string_tolerant(&db.txn_date, "txn_date"),
            category,
            amount: parse_decimal_string_tolerant(&db.amount, "amount"),
        }
    }
}

impl From<TransactionRecord> for TransactionDB {
    fn from(domain: TransactionRecord) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            txn_date: domain.date.format(DATE_FORMAT).to_string(),
            category: Some(domain.category),
            amount: domain.amount.to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}
