//! Ledger module - domain models, aggregation, and traits.

mod ledger_aggregator;
mod ledger_model;
mod ledger_traits;

#[cfg(test)]
mod ledger_aggregator_tests;

pub use ledger_aggregator::{
    category_summaries, daily_balances, daily_totals, spend_map_from_rows, spend_rows,
    sum_amounts_by_date, total_by_date, CategorySpendMap,
};
pub use ledger_model::{CategorySpendRow, CategorySummary, DailyBalance, TransactionRecord};
pub use ledger_traits::TransactionRepositoryTrait;
