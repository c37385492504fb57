//! Scenario simulation service.

use std::sync::Arc;

use async_trait::async_trait;
use futures::join;
use log::debug;

use crate::constants::DEFAULT_FORECAST_HORIZON;
use crate::forecast::ForecastServiceTrait;
use crate::ledger::{self, TransactionRepositoryTrait};
use crate::Result;

use super::scenario_calculator::{apply_change, validate_change};
use super::simulation_metrics::{evaluate, summarize};
use super::simulation_model::{ScenarioAction, SimulationResult};

#[async_trait]
pub trait SimulationServiceTrait: Send + Sync {
    /// Simulates an action against the user's ledger: the baseline and the
    /// modified spend are forecast with the same horizon and measured
    /// against each other. `horizon` defaults to `DEFAULT_FORECAST_HORIZON`.
    async fn simulate(
        &self,
        user_id: &str,
        action: &ScenarioAction,
        horizon: Option<usize>,
    ) -> Result<SimulationResult>;
}

#[derive(Clone)]
pub struct SimulationService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    forecast_service: Arc<dyn ForecastServiceTrait>,
}

impl SimulationService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        forecast_service: Arc<dyn ForecastServiceTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            forecast_service,
        }
    }
}

#[async_trait]
impl SimulationServiceTrait for SimulationService {
    async fn simulate(
        &self,
        user_id: &str,
        action: &ScenarioAction,
        horizon: Option<usize>,
    ) -> Result<SimulationResult> {
        validate_change(&action.change)?;

        let horizon = horizon.unwrap_or(DEFAULT_FORECAST_HORIZON);
        debug!(
            "Simulating action '{}' for user {} over {} days",
            action.id, user_id, horizon
        );

        let rows = self
            .transaction_repository
            .list_spend_by_date_and_category(user_id)
            .await?;
        let baseline_spend = ledger::spend_map_from_rows(&rows);
        let modified_spend = apply_change(&baseline_spend, &action.change);

        let before_series = ledger::daily_balances(&ledger::total_by_date(&baseline_spend));
        let after_series = ledger::daily_balances(&ledger::total_by_date(&modified_spend));

        let (before, after) = join!(
            self.forecast_service.project_series(&before_series, horizon),
            self.forecast_service.project_series(&after_series, horizon),
        );

        let metrics = evaluate(&before, &after);
        let explanation = summarize(&metrics);

        Ok(SimulationResult {
            before,
            after,
            metrics,
            explanation,
        })
    }
}
