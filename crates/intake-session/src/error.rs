use thiserror::Error;

use intake_services::error::ServiceError;

use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("form is invalid ({} field(s))", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("no assessment row at index {0}")]
    NoSuchRow(usize),

    #[error("select an assessment for row {0} first")]
    RowNotSelected(usize),

    #[error("complete the existing assessment rows before adding another")]
    IncompleteAssessments,
}
