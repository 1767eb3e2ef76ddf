//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model.
///
/// Created exactly once per judged request, always with a terminal
/// verdict, and never mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub language: String,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub verdict: String,
    pub passed_tests: i32,
    pub total_tests: i32,
    /// Average runtime over passing test cases, in milliseconds
    pub runtime_ms: i32,
    /// Average peak memory over passing test cases, in kilobytes
    pub memory_kb: i32,
    pub submitted_at: DateTime<Utc>,
}
