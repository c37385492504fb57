//! Flowcast Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Flowcast: ledger
//! aggregation, balance forecasting, what-if scenario simulation, and
//! spending insights. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod insights;
pub mod ledger;
pub mod recommendations;
pub mod simulation;

// Re-export common types from the ledger and forecast modules
pub use forecast::*;
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
