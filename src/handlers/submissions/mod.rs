//! Submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_submission))
        .route("/", get(handler::list_submissions))
        .route("/test", post(handler::test_custom_input))
        .route("/{id}", get(handler::get_submission))
}
