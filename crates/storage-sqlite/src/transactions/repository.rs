use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use flowcast_core::ledger::{
    spend_rows, CategorySpendRow, TransactionRecord, TransactionRepositoryTrait,
};
use flowcast_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::StorageError;
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TransactionRepository { pool }
    }

    pub fn load_for_user_impl(&self, target_user_id: &str) -> Result<Vec<TransactionRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions
            .filter(user_id.eq(target_user_id))
            .order(txn_date.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(TransactionRecord::from).collect())
    }

    /// Inserts a batch of records atomically. Used by ledger seeding and
    /// statement imports.
    pub fn insert_many(&self, records: Vec<TransactionRecord>) -> Result<usize> {
        self.pool.execute(|conn| -> Result<usize> {
            let mut inserted = 0;
            for record in records {
                let row = TransactionDB::from(record);
                inserted += diesel::insert_into(transactions::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
            }
            Ok(inserted)
        })
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    async fn list_transactions(&self, for_user_id: &str) -> Result<Vec<TransactionRecord>> {
        self.load_for_user_impl(for_user_id)
    }

    async fn list_spend_by_date_and_category(
        &self,
        for_user_id: &str,
    ) -> Result<Vec<CategorySpendRow>> {
        let records = self.load_for_user_impl(for_user_id)?;
        Ok(spend_rows(&records))
    }
}
