pub mod calendar;
pub mod events;
pub mod notes;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use semestra_core::SemestraError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to HTTP responses, mapping domain errors to
/// meaningful status codes.
pub struct AppError(anyhow::Error);

fn status_for(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<SemestraError>() {
        Some(
            SemestraError::EventNotFound(_)
            | SemestraError::SemesterNotFound(_)
            | SemestraError::CourseNotFound(_)
            | SemestraError::ClassNotFound(_),
        ) => StatusCode::NOT_FOUND,
        Some(SemestraError::InvalidEvent(_) | SemestraError::InvalidDate(_)) => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
