//! Problem and test case models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tags: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// One test case of a problem.
///
/// `ord` fixes the evaluation order within a problem; which failing case
/// a submitter sees first depends on it, so it is part of the problem's
/// external contract.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub is_sample: bool,
    pub ord: i32,
}
