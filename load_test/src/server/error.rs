use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::assignments::{SubmissionError, SubmissionResult};

/// Body returned when a request could not be read at all.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Body missing, not JSON, or of the wrong shape
    MalformedBody(String),
    Rejected(SubmissionError),
    ExamUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MalformedBody(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { message })).into_response()
            }
            AppError::Rejected(error) => (
                StatusCode::BAD_REQUEST,
                Json(SubmissionResult::rejected(&error)),
            )
                .into_response(),
            AppError::ExamUnavailable(reason) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Exam service unavailable: {reason}"),
            )
                .into_response(),
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(error: SubmissionError) -> Self {
        AppError::Rejected(error)
    }
}
