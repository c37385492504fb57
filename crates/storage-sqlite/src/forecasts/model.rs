//! Database model for served-forecast audit rows.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use flowcast_core::forecast::{ForecastMethod, ForecastRecord};

use crate::errors::StorageError;
use crate::transactions::{parse_date_string_tolerant, DATE_FORMAT};

/// Database model for forecast audit rows. `dates` and `balances` are stored
/// as JSON arrays in TEXT columns.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::forecasts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecordDB {
    pub id: String,
    pub user_id: String,
    pub forecast_date: String,
    pub dates: String,
    pub balances: String,
    pub method: String,
    pub created_at: String,
}

impl TryFrom<&ForecastRecord> for ForecastRecordDB {
    type Error = StorageError;

    fn try_from(record: &ForecastRecord) -> Result<Self, Self::Error> {
        let dates = serde_json::to_string(&record.dates)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        let balances = serde_json::to_string(&record.balances)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        Ok(Self {
            id: record.id.clone(),
            user_id: record.user_id.clone(),
            forecast_date: record.forecast_date.format(DATE_FORMAT).to_string(),
            dates,
            balances,
            method: record.method.as_str().to_string(),
            created_at: record.created_at.to_rfc3339(),
        })
    }
}

impl TryFrom<ForecastRecordDB> for ForecastRecord {
    type Error = StorageError;

    fn try_from(db: ForecastRecordDB) -> Result<Self, Self::Error> {
        let dates = serde_json::from_str(&db.dates)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        let balances = serde_json::from_str(&db.balances)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        let method = ForecastMethod::from_str(&db.method)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        let created_at = DateTime::parse_from_rfc3339(&db.created_at)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            forecast_date: parse_date_string_tolerant(&db.forecast_date, "forecast_date"),
            dates,
            balances,
            method,
            created_at,
        })
    }
}
