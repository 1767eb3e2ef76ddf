//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Problem, TestCase},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// List published problems
    pub async fn list_published(pool: &PgPool) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM problems WHERE is_published = TRUE ORDER BY created_at"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Get all test cases for a problem in their fixed evaluation order
    pub async fn get_test_cases(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 ORDER BY ord"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Get only the sample test cases for a problem (safe to show users)
    pub async fn get_sample_test_cases(
        pool: &PgPool,
        problem_id: &Uuid,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 AND is_sample = TRUE ORDER BY ord"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }
}
