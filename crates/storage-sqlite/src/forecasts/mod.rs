//! SQLite storage for the forecast audit log.

mod model;
mod repository;

pub use model::ForecastRecordDB;
pub use repository::ForecastAuditRepository;
