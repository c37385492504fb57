//! Pure aggregation over ledger rows.
//!
//! The ledger is sparse: only days with activity appear, and nothing here
//! zero-fills gaps. All per-date maps are `BTreeMap` so iteration is always
//! ascending by calendar day.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNCATEGORIZED};

use super::ledger_model::{CategorySpendRow, CategorySummary, DailyBalance, TransactionRecord};

/// Category -> date -> summed amount, the working shape for scenario cuts.
pub type CategorySpendMap = HashMap<String, BTreeMap<NaiveDate, Decimal>>;

/// Sums transaction amounts per calendar day.
pub fn sum_amounts_by_date(transactions: &[TransactionRecord]) -> BTreeMap<NaiveDate, Decimal> {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for txn in transactions {
        *sums.entry(txn.date).or_insert(Decimal::ZERO) += txn.amount;
    }
    sums
}

/// Collapses transactions into one summed row per (date, category) pair,
/// ordered by date then category. Blank categories land in the shared
/// uncategorized bucket.
pub fn spend_rows(transactions: &[TransactionRecord]) -> Vec<CategorySpendRow> {
    let mut sums: BTreeMap<(NaiveDate, String), Decimal> = BTreeMap::new();
    for txn in transactions {
        let category = normalize_category(&txn.category);
        *sums
            .entry((txn.date, category))
            .or_insert(Decimal::ZERO) += txn.amount;
    }

    sums.into_iter()
        .map(|((date, category), amount)| CategorySpendRow {
            date,
            category,
            amount,
        })
        .collect()
}

/// Sums grouped spend rows back down to one total per day.
pub fn daily_totals(rows: &[CategorySpendRow]) -> BTreeMap<NaiveDate, Decimal> {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for row in rows {
        *sums.entry(row.date).or_insert(Decimal::ZERO) += row.amount;
    }
    sums
}

/// Pivots grouped rows into the category -> date -> amount working map.
pub fn spend_map_from_rows(rows: &[CategorySpendRow]) -> CategorySpendMap {
    let mut spend: CategorySpendMap = HashMap::new();
    for row in rows {
        let category = normalize_category(&row.category);
        *spend
            .entry(category)
            .or_default()
            .entry(row.date)
            .or_insert(Decimal::ZERO) += row.amount;
    }
    spend
}

/// Sums a spend map across categories, one total per day.
pub fn total_by_date(spend: &CategorySpendMap) -> BTreeMap<NaiveDate, Decimal> {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for per_date in spend.values() {
        for (date, amount) in per_date {
            *sums.entry(*date).or_insert(Decimal::ZERO) += *amount;
        }
    }
    sums
}

/// Turns per-day sums into the balance series consumed by forecasting.
///
/// Each balance is the negated sum of that day's amounts, so net-spend days
/// emit positive balances.
pub fn daily_balances(sums: &BTreeMap<NaiveDate, Decimal>) -> Vec<DailyBalance> {
    sums.iter()
        .map(|(date, sum)| DailyBalance {
            date: *date,
            balance: -*sum,
        })
        .collect()
}

/// Per-category totals and transaction counts, ordered ascending by total so
/// the heaviest spending categories come first.
pub fn category_summaries(transactions: &[TransactionRecord]) -> Vec<CategorySummary> {
    let mut totals: HashMap<String, (Decimal, i64)> = HashMap::new();
    for txn in transactions {
        let category = normalize_category(&txn.category);
        let entry = totals.entry(category).or_insert((Decimal::ZERO, 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut summaries: Vec<CategorySummary> = totals
        .into_iter()
        .map(|(category, (total, count))| CategorySummary {
            category,
            total: total.round_dp(DISPLAY_DECIMAL_PRECISION),
            count,
        })
        .collect();

    summaries.sort_by(|a, b| a.total.cmp(&b.total));
    summaries
}

fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}
