//! SQLite storage implementation for ledger transactions.

mod model;
mod repository;

pub use model::TransactionDB;
pub use repository::TransactionRepository;

pub(crate) use model::{parse_date_string_tolerant, DATE_FORMAT};
