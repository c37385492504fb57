//! Forecast orchestration service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use crate::config::ForecastEngineConfig;
use crate::constants::DEFAULT_FORECAST_HORIZON;
use crate::ledger::{self, DailyBalance, TransactionRepositoryTrait};
use crate::Result;

use super::forecast_calculator::project_moving_average;
use super::forecast_model::{Forecast, ForecastMethod, ForecastRecord, SeriesPoint};
use super::forecast_traits::{ForecastAuditRepositoryTrait, ForecastServiceTrait};
use super::providers::{ForecastProviderTrait, RemoteForecastProvider};

#[derive(Clone)]
pub struct ForecastService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    audit_repository: Option<Arc<dyn ForecastAuditRepositoryTrait>>,
    provider: Option<Arc<dyn ForecastProviderTrait>>,
}

impl ForecastService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        audit_repository: Option<Arc<dyn ForecastAuditRepositoryTrait>>,
        provider: Option<Arc<dyn ForecastProviderTrait>>,
    ) -> Self {
        Self {
            transaction_repository,
            audit_repository,
            provider,
        }
    }

    /// Wires the remote provider from engine configuration. Without a remote
    /// endpoint every forecast stays on the local moving-average path.
    pub fn from_config(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        audit_repository: Option<Arc<dyn ForecastAuditRepositoryTrait>>,
        config: &ForecastEngineConfig,
    ) -> Self {
        let provider = RemoteForecastProvider::from_config(config)
            .map(|provider| Arc::new(provider) as Arc<dyn ForecastProviderTrait>);

        Self::new(transaction_repository, audit_repository, provider)
    }

    async fn record_audit(&self, user_id: &str, forecast: &Forecast) {
        if let Some(audit_repository) = &self.audit_repository {
            let record = ForecastRecord::from_forecast(user_id, forecast, Utc::now());
            if let Err(e) = audit_repository.record_forecast(&record).await {
                warn!("Failed to record served forecast for user {}: {}", user_id, e);
            }
        }
    }
}

#[async_trait]
impl ForecastServiceTrait for ForecastService {
    async fn forecast_for_user(&self, user_id: &str, horizon: Option<usize>) -> Result<Forecast> {
        let horizon = horizon.unwrap_or(DEFAULT_FORECAST_HORIZON);
        debug!("Building {}-day forecast for user {}", horizon, user_id);

        let transactions = self
            .transaction_repository
            .list_transactions(user_id)
            .await?;
        let balances = ledger::daily_balances(&ledger::sum_amounts_by_date(&transactions));

        let forecast = self.project_series(&balances, horizon).await;
        self.record_audit(user_id, &forecast).await;

        Ok(forecast)
    }

    async fn project_series(&self, series: &[DailyBalance], horizon: usize) -> Forecast {
        if let Some(provider) = &self.provider {
            if horizon > 0 && !series.is_empty() {
                let points: Vec<SeriesPoint> = series
                    .iter()
                    .map(|entry| SeriesPoint {
                        date: entry.date,
                        value: entry.balance,
                    })
                    .collect();

                match provider.predict(&points, horizon).await {
                    Ok(remote) => {
                        return Forecast {
                            dates: remote.dates,
                            balances: remote.balances,
                            method: ForecastMethod::Remote,
                        };
                    }
                    Err(e) => {
                        warn!(
                            "Forecast provider {} failed, falling back to moving average: {}",
                            provider.id(),
                            e
                        );
                    }
                }
            }
        }

        project_moving_average(series, horizon, Utc::now().date_naive())
    }
}
