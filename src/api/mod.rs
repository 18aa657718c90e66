//! API layer - HTTP handlers and routes
//!
//! Maps the `/user/*` pages onto the user service and turns results
//! into views or redirects.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
