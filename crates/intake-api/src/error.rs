use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use intake_export::error::ExportError;
use intake_insights::error::InsightError;
use intake_services::error::ServiceError;
use intake_session::validation::FieldError;
use intake_session::SessionError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Invalid(Vec<FieldError>),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Invalid(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "evaluation form is invalid".to_string(),
                fields,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, fields })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::AssessmentNotFound(_) | ServiceError::EvaluationNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            ServiceError::InvalidHouseNumber(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Service(inner) => inner.into(),
            SessionError::Invalid(fields) => ApiError::Invalid(fields),
            SessionError::NoSuchRow(_) => ApiError::NotFound(e.to_string()),
            SessionError::RowNotSelected(_) | SessionError::IncompleteAssessments => {
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<InsightError> for ApiError {
    fn from(e: InsightError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
