//! SQLite storage implementation for Flowcast.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `flowcast-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the transaction ledger and the forecast
//!   audit log
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist; `core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod forecasts;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    DbTransactionExecutor,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from flowcast-core for convenience
pub use flowcast_core::errors::{DatabaseError, Error, Result};
