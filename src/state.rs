//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor. Dependencies are
//! injected here once at startup; there is no ambient global state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, judge::CodeExecutor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Client for the remote execution engine
    judge: Arc<dyn CodeExecutor>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, judge: Arc<dyn CodeExecutor>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, judge, config }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the execution engine client
    pub fn judge(&self) -> &dyn CodeExecutor {
        self.inner.judge.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
