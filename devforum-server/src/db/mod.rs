//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - The pool is passed in explicitly; there is no process-wide handle
//! - List operations use JOINs - no N+1 queries
//! - Rely on DB constraints, classify violations - no check-then-insert
//! - Counters are updated in place, never read-modify-write
//! - Transactions for multi-step writes

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_lazy_pool, create_pool, create_pool_with_options};
pub use repos::*;
