//! Scenario simulation module - actions, spend rewrites, and metrics.

mod scenario_calculator;
mod simulation_metrics;
mod simulation_model;
mod simulation_service;


#[cfg(test)]
mod simulation_service_tests;

pub use scenario_calculator::{apply_change, validate_change};
pub use simulation_metrics::{evaluate, first_negative_day, summarize};
pub use simulation_model::{
    ActionError, BufferImprovement, RiskLevel, ScenarioAction, SimulationMetrics,
    SimulationResult, SpendingChange,
};
pub use simulation_service::{SimulationService, SimulationServiceTrait};
