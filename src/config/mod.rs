//! Application configuration module
//!
//! Environment-driven settings plus field limits, defaults and view names.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
