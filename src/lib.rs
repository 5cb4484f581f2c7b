// Trader Queries - Core Library
// Exposes the record types, the query engine, and the canonical dataset
// for use in the CLI binary and tests

pub mod dataset;
pub mod entities;
pub mod queries;

// Re-export commonly used types
pub use dataset::sample_transactions;
pub use entities::{Trader, Transaction};
pub use queries::{EmptyMaximumError, QueryEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
