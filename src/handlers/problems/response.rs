//! Problem response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Problem list entry
#[derive(Debug, Serialize)]
pub struct ProblemSummaryResponse {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub difficulty: String,
    pub tags: String,
}

/// Problems list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummaryResponse>,
}

/// Sample test case shown to users
#[derive(Debug, Serialize)]
pub struct SampleTestCase {
    pub input: String,
    pub expected_output: String,
}

/// Problem detail with sample test cases
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub tags: String,
    pub sample_test_cases: Vec<SampleTestCase>,
}
