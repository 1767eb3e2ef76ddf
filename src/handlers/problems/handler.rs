//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{ProblemService, SubmissionService},
    state::AppState,
};

use super::response::{ProblemDetailResponse, ProblemsListResponse};
use crate::handlers::submissions::response::SubmissionsListResponse;

/// List published problems
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<ProblemsListResponse>> {
    let problems = ProblemService::list_problems(state.db()).await?;

    Ok(Json(problems))
}

/// Get a problem with its sample test cases
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let problem = ProblemService::get_problem(state.db(), &id).await?;

    Ok(Json(problem))
}

/// List the caller's submissions for one problem
pub async fn list_problem_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let submissions =
        SubmissionService::list_problem_submissions(state.db(), &auth_user.id, &id).await?;

    Ok(Json(submissions))
}
