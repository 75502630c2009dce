use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the growth transformations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrowthError {
    #[error("invalid date format: {0:?} (expected D.M.YYYY)")]
    InvalidDate(String),

    #[error("{0} has no week start inside the supported calendar")]
    DateOutOfRange(NaiveDate),

    #[error("unknown view mode: {0:?} (expected 'daily' or 'weekly')")]
    UnknownMode(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<GrowthError> for AppError {
    fn from(err: GrowthError) -> Self {
        match err {
            GrowthError::UnknownMode(_) => Self::bad_request(err.to_string()),
            // The records are compiled in, so a bad date is our bug, not the caller's.
            GrowthError::InvalidDate(_) | GrowthError::DateOutOfRange(_) => Self::internal(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
