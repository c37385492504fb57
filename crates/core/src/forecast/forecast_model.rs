//! Forecast domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// How a forecast was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// Local smoothed moving average.
    #[default]
    MovingAverage,
    /// External forecast service.
    Remote,
}

impl ForecastMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::MovingAverage => "moving_average",
            ForecastMethod::Remote => "remote",
        }
    }
}

impl FromStr for ForecastMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moving_average" => Ok(ForecastMethod::MovingAverage),
            "remote" => Ok(ForecastMethod::Remote),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown forecast method: {other}"
            ))),
        }
    }
}

/// A projected daily balance series.
///
/// `dates` and `balances` always have the same length, with dates strictly
/// ascending one calendar day apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub dates: Vec<NaiveDate>,
    pub balances: Vec<Decimal>,
    pub method: ForecastMethod,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Last projected balance, `None` for a zero-horizon forecast.
    pub fn final_balance(&self) -> Option<Decimal> {
        self.balances.last().copied()
    }
}

/// One observed (date, value) point sent to the remote forecaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Audit row persisted after a forecast is served. Write-only history, the
/// engine never reads these back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub id: String,
    pub user_id: String,
    /// Day the forecast was produced.
    pub forecast_date: NaiveDate,
    pub dates: Vec<NaiveDate>,
    pub balances: Vec<Decimal>,
    pub method: ForecastMethod,
    pub created_at: DateTime<Utc>,
}

impl ForecastRecord {
    pub fn from_forecast(user_id: impl Into<String>, forecast: &Forecast, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            forecast_date: now.date_naive(),
            dates: forecast.dates.clone(),
            balances: forecast.balances.clone(),
            method: forecast.method,
            created_at: now,
        }
    }
}
