use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use flowcast_core::forecast::{ForecastAuditRepositoryTrait, ForecastRecord};
use flowcast_core::Result;

use super::model::ForecastRecordDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::forecasts;
use crate::schema::forecasts::dsl::*;

pub struct ForecastAuditRepository {
    pool: Arc<DbPool>,
}

impl ForecastAuditRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        ForecastAuditRepository { pool }
    }

    /// Served forecasts for a user, newest first. The engine never reads
    /// these; this exists for audit inspection and tests.
    pub fn list_for_user(&self, target_user_id: &str) -> Result<Vec<ForecastRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = forecasts
            .filter(user_id.eq(target_user_id))
            .order(created_at.desc())
            .load::<ForecastRecordDB>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| ForecastRecord::try_from(row).map_err(Into::into))
            .collect()
    }
}

#[async_trait]
impl ForecastAuditRepositoryTrait for ForecastAuditRepository {
    async fn record_forecast(&self, record: &ForecastRecord) -> Result<()> {
        let row = ForecastRecordDB::try_from(record)?;
        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(forecasts::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
