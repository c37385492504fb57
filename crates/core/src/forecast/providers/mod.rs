//! External forecast providers.
//!
//! A provider is asked once per forecast; any failure makes the caller fall
//! back to the local moving-average path, so every error here is recoverable
//! by construction.

mod remote;

pub use remote::RemoteForecastProvider;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::forecast_model::SeriesPoint;

/// Balance series returned by an external forecaster.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteForecast {
    pub dates: Vec<NaiveDate>,
    pub balances: Vec<Decimal>,
}

/// Errors that can occur while delegating a forecast to an external service.
#[derive(Error, Debug)]
pub enum ForecastProviderError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status code.
    #[error("Provider error: {provider} - HTTP {status}")]
    Http {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider answered 2xx but the body did not match the contract.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the body
        provider: String,
        /// Description of the contract violation
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// An external service that can project a balance series.
#[async_trait]
pub trait ForecastProviderTrait: Send + Sync {
    /// Stable identifier used in logs.
    fn id(&self) -> &'static str;

    /// Projects `days` balances past the end of `series`. One attempt, no
    /// retries; partial results are never returned.
    async fn predict(
        &self,
        series: &[SeriesPoint],
        days: usize,
    ) -> Result<RemoteForecast, ForecastProviderError>;
}
