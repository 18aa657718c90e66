use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// A named view and the model it is rendered with.
///
/// Rendering is left to the client; the body is `{"view": ..., "model": ...}`.
#[derive(Debug, Serialize)]
pub struct View<T: Serialize> {
    /// View name
    pub view: &'static str,
    /// Data bound to the view
    pub model: T,
}

impl<T: Serialize> View<T> {
    pub fn new(view: &'static str, model: T) -> Self {
        Self { view, model }
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
