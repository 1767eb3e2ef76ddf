//! Problem handlers

mod handler;
pub mod response;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_problems))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}/submissions", get(handler::list_problem_submissions))
}
