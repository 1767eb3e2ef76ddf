//! Submission service
//!
//! Orchestrates a submission end to end: load the problem, evaluate the
//! code against its test cases, persist the judged record, and update
//! the submitter's progress on a first acceptance.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    constants::languages,
    db::repositories::{ProblemRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::submissions::{
        request::{CreateSubmissionRequest, CustomTestRequest},
        response::{
            CustomTestResponse, SubmissionResponse, SubmissionSummaryResponse,
            SubmissionsListResponse,
        },
    },
    judge::{CodeExecutor, Verdict, evaluate},
    models::Submission,
    services::StreakService,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Judge a submission and persist its record.
    ///
    /// Exactly one submission row is written per request, always with a
    /// terminal verdict; evaluation failures inside the test-case loop
    /// become verdicts, never errors. Only request-level problems
    /// (unknown language, unknown problem) error out before judging.
    pub async fn submit(
        pool: &PgPool,
        executor: &dyn CodeExecutor,
        user_id: &Uuid,
        payload: CreateSubmissionRequest,
    ) -> AppResult<SubmissionSummaryResponse> {
        if languages::engine_id(&payload.language).is_none() {
            return Err(AppError::UnsupportedLanguage(payload.language));
        }

        let problem = ProblemRepository::find_by_id(pool, &payload.problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let test_cases = ProblemRepository::get_test_cases(pool, &problem.id).await?;

        info!(
            user_id = %user_id,
            problem = %problem.code,
            language = %payload.language,
            cases = test_cases.len(),
            "judging submission"
        );

        let outcome = evaluate(
            executor,
            &test_cases,
            &payload.source_code,
            &payload.language,
        )
        .await;

        let submission = SubmissionRepository::create(
            pool,
            user_id,
            &problem.id,
            &payload.language,
            &payload.source_code,
            outcome.verdict.as_str(),
            outcome.passed,
            outcome.total,
            outcome.avg_runtime_ms,
            outcome.avg_memory_kb,
        )
        .await?;

        info!(
            submission_id = %submission.id,
            verdict = %outcome.verdict,
            passed = outcome.passed,
            total = outcome.total,
            "submission judged"
        );

        if outcome.verdict.is_accepted() {
            Self::record_acceptance(pool, user_id, &problem.id, &submission.id).await?;
        }

        Ok(SubmissionSummaryResponse {
            submission_id: submission.id,
            verdict: submission.verdict,
            passed_tests: submission.passed_tests,
            total_tests: submission.total_tests,
            runtime_ms: submission.runtime_ms,
            memory_kb: submission.memory_kb,
        })
    }

    /// Update streak and progress counters if this acceptance is the
    /// user's first for the problem.
    ///
    /// The read-modify-write of the progress counters runs inside a
    /// transaction holding a lock on the user row, so concurrent first
    /// acceptances for the same user serialize instead of losing updates.
    async fn record_acceptance(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
        submission_id: &Uuid,
    ) -> AppResult<()> {
        let already_solved =
            SubmissionRepository::has_other_accepted(pool, user_id, problem_id, submission_id)
                .await?;
        if already_solved {
            return Ok(());
        }

        let mut tx = pool.begin().await?;

        let Some(prior) = UserRepository::progress_for_update(&mut tx, user_id).await? else {
            warn!(user_id = %user_id, "accepted submission for unknown user, skipping progress update");
            return Ok(());
        };

        let updated = StreakService::record_first_acceptance(&prior, chrono::Utc::now());
        UserRepository::store_progress(&mut tx, user_id, &updated).await?;

        tx.commit().await?;

        info!(
            user_id = %user_id,
            problems_solved = updated.problems_solved,
            current_streak = updated.current_streak,
            "first acceptance recorded"
        );

        Ok(())
    }

    /// Run code once against caller-supplied input.
    ///
    /// Not scored and never persisted; judge failures surface to the
    /// caller instead of being absorbed into a verdict.
    pub async fn test_custom_input(
        executor: &dyn CodeExecutor,
        payload: CustomTestRequest,
    ) -> AppResult<CustomTestResponse> {
        let result = executor
            .execute(&payload.source_code, &payload.language, &payload.stdin)
            .await?;

        let verdict = Verdict::from_status_id(result.status.id);
        let runtime_ms = result.runtime_ms().round() as i32;
        let memory_kb = result.memory_kb() as i32;

        Ok(CustomTestResponse {
            verdict: verdict.as_str().to_string(),
            status_description: result.status.description,
            stdout: result.stdout.unwrap_or_default(),
            stderr: result.stderr.unwrap_or_default(),
            compile_output: result.compile_output.unwrap_or_default(),
            runtime_ms,
            memory_kb,
        })
    }

    /// Get submission by ID
    pub async fn get_submission(pool: &PgPool, id: &Uuid) -> AppResult<SubmissionResponse> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        Self::to_submission_response(pool, submission).await
    }

    /// List the caller's recent submissions
    pub async fn list_user_submissions(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<SubmissionsListResponse> {
        let submissions = SubmissionRepository::list_for_user(pool, user_id).await?;

        let mut responses = Vec::with_capacity(submissions.len());
        for submission in submissions {
            responses.push(Self::to_submission_response(pool, submission).await?);
        }

        Ok(SubmissionsListResponse {
            submissions: responses,
        })
    }

    /// List the caller's recent submissions for one problem
    pub async fn list_problem_submissions(
        pool: &PgPool,
        user_id: &Uuid,
        problem_id: &Uuid,
    ) -> AppResult<SubmissionsListResponse> {
        let submissions = SubmissionRepository::list_for_problem(pool, user_id, problem_id).await?;

        let mut responses = Vec::with_capacity(submissions.len());
        for submission in submissions {
            responses.push(Self::to_submission_response(pool, submission).await?);
        }

        Ok(SubmissionsListResponse {
            submissions: responses,
        })
    }

    // Helper function
    async fn to_submission_response(
        pool: &PgPool,
        submission: Submission,
    ) -> AppResult<SubmissionResponse> {
        let problem: Option<(String, String)> =
            sqlx::query_as(r#"SELECT code, title FROM problems WHERE id = $1"#)
                .bind(submission.problem_id)
                .fetch_optional(pool)
                .await?;

        let (problem_code, problem_title) = problem.unwrap_or_default();

        Ok(SubmissionResponse {
            id: submission.id,
            problem_id: submission.problem_id,
            problem_code,
            problem_title,
            language: submission.language,
            verdict: submission.verdict,
            passed_tests: submission.passed_tests,
            total_tests: submission.total_tests,
            runtime_ms: submission.runtime_ms,
            memory_kb: submission.memory_kb,
            submitted_at: submission.submitted_at,
        })
    }
}
