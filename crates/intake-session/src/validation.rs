use serde::{Deserialize, Serialize};

use intake_core::models::form::{filled, EvaluationFields};

use crate::row::AssessmentRow;

pub const REQUIRED_MESSAGE: &str = "Field is required!";
pub const MIN_SCORE_MESSAGE: &str = "Score must be 0 or greater";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Control id, e.g. `therapistName` or `assessments[1].score`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
        }
    }
}

/// Top-level controls that must be filled before submission.
fn required_fields(fields: &EvaluationFields) -> [(&'static str, &Option<String>); 12] {
    [
        ("clinicName", &fields.clinic_name),
        ("clinicLicense", &fields.clinic_license),
        ("therapistName", &fields.therapist_name),
        ("patientName", &fields.patient_name),
        ("patientId", &fields.patient_id),
        ("clientId", &fields.client_id),
        ("birthDate", &fields.birth_date),
        ("postalCode", &fields.postal_code),
        ("houseNumber", &fields.house_number),
        ("address", &fields.address),
        ("referringPhysician", &fields.referring_physician),
        ("referralSource", &fields.referral_source),
    ]
}

/// Optional top-level controls; always valid.
const OPTIONAL_FIELD_COUNT: usize = 2;

pub fn validate_fields(fields: &EvaluationFields) -> Vec<FieldError> {
    required_fields(fields)
        .into_iter()
        .filter(|(_, value)| filled(value).is_none())
        .map(|(name, _)| FieldError::new(name, REQUIRED_MESSAGE))
        .collect()
}

pub fn validate_rows(rows: &[AssessmentRow]) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if row.assessment.name.trim().is_empty() {
            errors.push(FieldError::new(format!("assessments[{index}].name"), REQUIRED_MESSAGE));
        }
        if !row.enabled {
            continue;
        }
        match row.assessment.score {
            None => errors.push(FieldError::new(
                format!("assessments[{index}].score"),
                REQUIRED_MESSAGE,
            )),
            Some(score) if score < 0.0 => errors.push(FieldError::new(
                format!("assessments[{index}].score"),
                MIN_SCORE_MESSAGE,
            )),
            Some(_) => {}
        }
    }
    errors
}

/// How many top-level controls (the assessment list counting as one)
/// currently hold a valid value.
pub fn valid_control_count(fields: &EvaluationFields, rows: &[AssessmentRow]) -> usize {
    let required = required_fields(fields)
        .into_iter()
        .filter(|(_, value)| filled(value).is_some())
        .count();
    let assessments = usize::from(rows.iter().all(AssessmentRow::is_valid));
    required + OPTIONAL_FIELD_COUNT + assessments
}
