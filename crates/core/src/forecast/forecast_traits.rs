//! Forecast service and repository traits.

use async_trait::async_trait;

use crate::ledger::DailyBalance;
use crate::Result;

use super::forecast_model::{Forecast, ForecastRecord};

/// Produces balance forecasts for users and raw series.
#[async_trait]
pub trait ForecastServiceTrait: Send + Sync {
    /// Loads the user's ledger, derives daily balances, and projects them
    /// forward. `horizon` defaults to `DEFAULT_FORECAST_HORIZON` days when
    /// `None`. The served forecast is recorded for audit.
    async fn forecast_for_user(&self, user_id: &str, horizon: Option<usize>) -> Result<Forecast>;

    /// Projects an already-derived balance series. Delegates to the remote
    /// provider when one is configured and silently falls back to the local
    /// moving average when the provider fails.
    async fn project_series(&self, series: &[DailyBalance], horizon: usize) -> Forecast;
}

/// Write-only audit sink for served forecasts.
#[async_trait]
pub trait ForecastAuditRepositoryTrait: Send + Sync {
    async fn record_forecast(&self, record: &ForecastRecord) -> Result<()>;
}
