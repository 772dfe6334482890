//! Database layer - connection pool and entity repositories.
//!
//! # Design principles
//!
//! - One pooled connection handle, borrowed per call - no `Arc<Mutex<_>>`
//! - Every read selects the entity's full natural column set - no partially
//!   populated records
//! - Every externally supplied value is `?`-bound - no string interpolation
//! - Creates follow insert-then-reread so server-computed columns come back
//! - Guild invite acceptance is the only multi-statement operation and runs
//!   in a transaction

pub mod error;
pub mod pool;
pub mod repos;

pub use error::{DbError, DbResult};
pub use pool::create_pool;
