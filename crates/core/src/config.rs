//! Runtime configuration for the forecast engine.

use std::time::Duration;

/// Timeout applied to remote forecast requests when none is configured.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable naming the remote forecast service base URL.
pub const FORECAST_SERVICE_URL_ENV: &str = "FORECAST_SERVICE_URL";

/// Configuration handed to the forecast service at construction.
#[derive(Debug, Clone)]
pub struct ForecastEngineConfig {
    /// Base URL of the remote forecast service, e.g. `http://localhost:8001`.
    /// `None` keeps every forecast on the local moving-average path.
    pub remote_endpoint: Option<String>,
    /// Per-request timeout for the remote forecast provider.
    pub request_timeout: Duration,
}

impl Default for ForecastEngineConfig {
    fn default() -> Self {
        Self {
            remote_endpoint: None,
            request_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

impl ForecastEngineConfig {
    /// Reads the configuration from the process environment.
    ///
    /// A missing or blank `FORECAST_SERVICE_URL` leaves the remote provider
    /// disabled. Trailing slashes are stripped so the provider can join paths.
    pub fn from_env() -> Self {
        let remote_endpoint = std::env::var(FORECAST_SERVICE_URL_ENV)
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        Self {
            remote_endpoint,
            ..Self::default()
        }
    }
}
