//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `check` - Verify the database is reachable

pub mod args;

pub use args::{Cli, Commands};
