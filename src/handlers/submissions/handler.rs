//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, services::SubmissionService,
    state::AppState,
};

use super::{
    request::{CreateSubmissionRequest, CustomTestRequest},
    response::{
        CustomTestResponse, SubmissionResponse, SubmissionSummaryResponse, SubmissionsListResponse,
    },
};

/// Submit a solution for judging.
///
/// The request blocks until judging finishes and returns the final
/// verdict with pass counts and aggregated metrics.
pub async fn create_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<SubmissionSummaryResponse>)> {
    payload.validate()?;

    let summary =
        SubmissionService::submit(state.db(), state.judge(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// Run code against custom input without scoring or persisting
pub async fn test_custom_input(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Json(payload): Json<CustomTestRequest>,
) -> AppResult<Json<CustomTestResponse>> {
    payload.validate()?;

    let result = SubmissionService::test_custom_input(state.judge(), payload).await?;

    Ok(Json(result))
}

/// Get a specific submission
pub async fn get_submission(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = SubmissionService::get_submission(state.db(), &id).await?;

    Ok(Json(submission))
}

/// List the caller's recent submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<SubmissionsListResponse>> {
    let submissions = SubmissionService::list_user_submissions(state.db(), &auth_user.id).await?;

    Ok(Json(submissions))
}
