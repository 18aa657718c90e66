//! Infrastructure layer - External systems integration
//!
//! - Database connection pool
//! - Per-operation transactions
//! - User repository (persistence gateway)

pub mod db;
pub mod repositories;
pub mod transaction;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
