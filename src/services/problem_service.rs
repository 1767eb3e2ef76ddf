//! Problem service
//!
//! Read-side access to the problem catalog. Problem authoring and test
//! case management happen outside this service.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    handlers::problems::response::{
        ProblemDetailResponse, ProblemSummaryResponse, ProblemsListResponse, SampleTestCase,
    },
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List published problems
    pub async fn list_problems(pool: &PgPool) -> AppResult<ProblemsListResponse> {
        let problems = ProblemRepository::list_published(pool).await?;

        Ok(ProblemsListResponse {
            problems: problems
                .into_iter()
                .map(|p| ProblemSummaryResponse {
                    id: p.id,
                    code: p.code,
                    title: p.title,
                    difficulty: p.difficulty,
                    tags: p.tags,
                })
                .collect(),
        })
    }

    /// Get one problem with its sample test cases.
    ///
    /// Hidden test cases never leave the server.
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<ProblemDetailResponse> {
        let problem = ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let samples = ProblemRepository::get_sample_test_cases(pool, id).await?;

        Ok(ProblemDetailResponse {
            id: problem.id,
            code: problem.code,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            tags: problem.tags,
            sample_test_cases: samples
                .into_iter()
                .map(|tc| SampleTestCase {
                    input: tc.input,
                    expected_output: tc.expected_output,
                })
                .collect(),
        })
    }
}
