//! Repository layer - Data access abstraction
//!
//! The persistence gateway for users: one statement per call, writes in
//! their own transaction, failures propagated.

pub mod entities;
mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
