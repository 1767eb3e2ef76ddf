//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Judged-submission summary returned from the submit endpoint
#[derive(Debug, Serialize)]
pub struct SubmissionSummaryResponse {
    pub submission_id: Uuid,
    pub verdict: String,
    pub passed_tests: i32,
    pub total_tests: i32,
    pub runtime_ms: i32,
    pub memory_kb: i32,
}

/// One submission with its problem context
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub problem_code: String,
    pub problem_title: String,
    pub language: String,
    pub verdict: String,
    pub passed_tests: i32,
    pub total_tests: i32,
    pub runtime_ms: i32,
    pub memory_kb: i32,
    pub submitted_at: DateTime<Utc>,
}

/// Submissions list response
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionResponse>,
}

/// Result of an ad hoc custom-input run
#[derive(Debug, Serialize)]
pub struct CustomTestResponse {
    pub verdict: String,
    pub status_description: Option<String>,
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub runtime_ms: i32,
    pub memory_kb: i32,
}
