use std::sync::Arc;

use axum::{extract::State, Json};

use super::assignments::{SubmissionBody, SubmissionResult};
use super::error::AppError;
use super::extractors::AppJson;
use super::identity::{LoginBody, LoginResponse};
use super::AppState;

/// `POST /api/auth/login`, always 200; the outcome is in the body
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<LoginBody>,
) -> Json<LoginResponse> {
    Json(state.identity.login_with_retry(&body).await)
}

/// `POST /api/assignments/submit`
pub async fn submit_assignment(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<SubmissionBody>,
) -> Result<Json<SubmissionResult>, AppError> {
    if let Err(e) = state.assignments.validate_and_store(&body) {
        tracing::debug!("Rejected submission from '{}': {}", body.student_id, e);
        return Err(e.into());
    }
    Ok(Json(SubmissionResult::accepted()))
}

/// `POST /api/exam/submit`
pub async fn submit_exam(State(state): State<Arc<AppState>>) -> Result<&'static str, AppError> {
    state
        .exam
        .submit()
        .map_err(|e| AppError::ExamUnavailable(e.to_string()))
}
