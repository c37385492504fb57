//! HTTP forecast provider.
//!
//! Posts the observed balance series to `{base}/predict` and expects the
//! service to answer with parallel `dates` and `balances` arrays:
//!
//! ```json
//! { "series": [{ "date": "2024-01-01", "value": 120.0 }], "days": 14 }
//! ```

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::ForecastEngineConfig;
use crate::forecast::forecast_model::SeriesPoint;

use super::{ForecastProviderError, ForecastProviderTrait, RemoteForecast};

const PROVIDER_ID: &str = "REMOTE_FORECAST";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    series: &'a [SeriesPoint],
    days: usize,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    dates: Vec<NaiveDate>,
    balances: Vec<Decimal>,
}

/// Provider backed by an external prediction service.
pub struct RemoteForecastProvider {
    client: Client,
    base_url: String,
}

impl RemoteForecastProvider {
    /// Create a provider for the given base URL with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the provider from engine configuration, `None` when no remote
    /// endpoint is configured.
    pub fn from_config(config: &ForecastEngineConfig) -> Option<Self> {
        config
            .remote_endpoint
            .as_ref()
            .map(|endpoint| Self::new(endpoint.clone(), config.request_timeout))
    }

    fn validate(&self, body: PredictResponse, days: usize) -> Result<RemoteForecast, ForecastProviderError> {
        if body.dates.len() != body.balances.len() {
            return Err(self.malformed(format!(
                "dates ({}) and balances ({}) length mismatch",
                body.dates.len(),
                body.balances.len()
            )));
        }

        if body.dates.len() != days {
            return Err(self.malformed(format!(
                "expected {} projected days, got {}",
                days,
                body.dates.len()
            )));
        }

        if body.dates.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(self.malformed("dates are not strictly ascending".to_string()));
        }

        Ok(RemoteForecast {
            dates: body.dates,
            balances: body.balances,
        })
    }

    fn malformed(&self, message: String) -> ForecastProviderError {
        ForecastProviderError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message,
        }
    }
}

#[async_trait]
impl ForecastProviderTrait for RemoteForecastProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn predict(
        &self,
        series: &[SeriesPoint],
        days: usize,
    ) -> Result<RemoteForecast, ForecastProviderError> {
        let url = format!("{}/predict", self.base_url);
        debug!(
            "Requesting remote forecast: {} observed points, {} days",
            series.len(),
            days
        );

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { series, days })
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastProviderError::Http {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| self.malformed(e.to_string()))?;

        self.validate(body, days)
    }
}

fn classify_request_error(error: reqwest::Error) -> ForecastProviderError {
    if error.is_timeout() {
        ForecastProviderError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else {
        ForecastProviderError::Network(error)
    }
}
