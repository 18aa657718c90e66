//! Domain layer - Core business entities and validation
//!
//! DDD: Domain layer has NO infrastructure dependencies (except error types).

pub mod user;
pub mod validation;

pub use user::{User, UserForm};
pub use validation::{is_invalid, validate_user};
