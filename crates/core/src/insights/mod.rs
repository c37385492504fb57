//! Insights module - spending statistics and anomaly detection.

mod insights_calculator;
mod insights_model;
mod insights_service;


pub use insights_calculator::detect_anomalies;
pub use insights_model::{AnomalySeverity, SpendingAnomaly};
pub use insights_service::{InsightsService, InsightsServiceTrait};
