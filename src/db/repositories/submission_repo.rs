//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{PROBLEM_SUBMISSIONS_LIMIT, USER_SUBMISSIONS_LIMIT},
    error::AppResult,
    models::Submission,
};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission record with its terminal verdict
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        language: &str,
        source_code: &str,
        verdict: &str,
        passed_tests: i32,
        total_tests: i32,
        runtime_ms: i32,
        memory_kb: i32,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                user_id, problem_id, language, source_code, verdict,
                passed_tests, total_tests, runtime_ms, memory_kb
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(language)
        .bind(source_code)
        .bind(verdict)
        .bind(passed_tests)
        .bind(total_tests)
        .bind(runtime_ms)
        .bind(memory_kb)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// List a user's most recent submissions
    pub async fn list_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1
            ORDER BY submitted_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(USER_SUBMISSIONS_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// List a user's most recent submissions for one problem
    pub async fn list_for_problem(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = $1 AND problem_id = $2
            ORDER BY submitted_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(PROBLEM_SUBMISSIONS_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Check whether the user has an accepted submission for this problem
    /// other than `exclude_id`.
    ///
    /// Used for first-acceptance detection: streak and progress counters
    /// update exactly once per (user, problem) pair.
    pub async fn has_other_accepted(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        exclude_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM submissions
                WHERE user_id = $1 AND problem_id = $2
                  AND verdict = 'accepted' AND id <> $3
            )
            "#,
        )
        .bind(user_id)
        .bind(problem_id)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
