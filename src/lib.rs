//! CodeArena - Online Code-Judging Platform
//!
//! This library provides the core functionality for the CodeArena
//! platform: users submit source code against a problem's test cases,
//! the code runs in a remote execution sandbox, and the platform
//! aggregates per-test-case results into a final verdict.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic (orchestration, streak bookkeeping)
//! - **Judge**: Execution engine client, verdict classification, evaluation
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
