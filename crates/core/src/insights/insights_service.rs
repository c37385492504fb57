//! Spending insights service.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::ledger::{self, CategorySummary, TransactionRepositoryTrait};
use crate::Result;

use super::insights_calculator::detect_anomalies;
use super::insights_model::SpendingAnomaly;

#[async_trait]
pub trait InsightsServiceTrait: Send + Sync {
    /// Per-category totals and counts, heaviest spending first.
    async fn category_summaries(&self, user_id: &str) -> Result<Vec<CategorySummary>>;

    /// Spend entries that deviate sharply from their category's average.
    async fn spending_anomalies(&self, user_id: &str) -> Result<Vec<SpendingAnomaly>>;
}

#[derive(Clone)]
pub struct InsightsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl InsightsService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

#[async_trait]
impl InsightsServiceTrait for InsightsService {
    async fn category_summaries(&self, user_id: &str) -> Result<Vec<CategorySummary>> {
        let transactions = self
            .transaction_repository
            .list_transactions(user_id)
            .await?;
        Ok(ledger::category_summaries(&transactions))
    }

    async fn spending_anomalies(&self, user_id: &str) -> Result<Vec<SpendingAnomaly>> {
        let rows = self
            .transaction_repository
            .list_spend_by_date_and_category(user_id)
            .await?;
        debug!("Scanning {} spend rows for anomalies", rows.len());
        Ok(detect_anomalies(&rows))
    }
}
