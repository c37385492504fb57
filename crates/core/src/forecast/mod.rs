//! Forecast module - projection, providers, and orchestration.

mod forecast_calculator;
mod forecast_model;
mod forecast_service;
mod forecast_traits;
pub mod providers;

#[cfg(test)]
mod forecast_calculator_tests;


pub use forecast_calculator::project_moving_average;
pub use forecast_model::{Forecast, ForecastMethod, ForecastRecord, SeriesPoint};
pub use forecast_service::ForecastService;
pub use forecast_traits::{ForecastAuditRepositoryTrait, ForecastServiceTrait};
