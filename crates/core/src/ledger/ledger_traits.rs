//! Ledger repository traits.

use async_trait::async_trait;

use crate::Result;

use super::ledger_model::{CategorySpendRow, TransactionRecord};

/// Read access to the transaction store.
///
/// The engine only reads the ledger; ingestion and mutation stay with the
/// pipeline that owns the store.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// All transactions for a user, ascending by date.
    async fn list_transactions(&self, user_id: &str) -> Result<Vec<TransactionRecord>>;

    /// Summed spend per (date, category) pair for a user, ascending by date.
    async fn list_spend_by_date_and_category(&self, user_id: &str)
        -> Result<Vec<CategorySpendRow>>;
}
