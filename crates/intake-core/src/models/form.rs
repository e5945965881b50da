use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Birth dates are shown and submitted as `dd-MM-yyyy`.
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Current values of the evaluation form's top-level controls, plus the
/// patient details that travel in the submission without being editable.
///
/// `None` means the control is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationFields {
    pub clinic_name: Option<String>,
    pub clinic_license: Option<String>,
    pub therapist_name: Option<String>,
    pub patient_name: Option<String>,
    pub patient_id: Option<String>,
    pub client_id: Option<String>,
    pub birth_date: Option<String>,
    pub postal_code: Option<String>,
    pub house_number: Option<String>,
    pub addition: Option<String>,
    pub address: Option<String>,
    pub referring_physician: Option<String>,
    pub referral_source: Option<String>,
    pub diagnosis_code: Option<String>,
    pub patient_gender: Option<String>,
    pub patient_initials: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
}

/// The clinician-editable subset of [`EvaluationFields`] outside the
/// address flow. Absent members are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldUpdate {
    #[serde(default)]
    pub therapist_name: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub referring_physician: Option<String>,
    #[serde(default)]
    pub referral_source: Option<String>,
    #[serde(default)]
    pub diagnosis_code: Option<String>,
}

impl EvaluationFields {
    pub fn apply(&mut self, update: FieldUpdate) {
        let FieldUpdate {
            therapist_name,
            patient_name,
            birth_date,
            referring_physician,
            referral_source,
            diagnosis_code,
        } = update;

        for (slot, value) in [
            (&mut self.therapist_name, therapist_name),
            (&mut self.patient_name, patient_name),
            (&mut self.birth_date, birth_date),
            (&mut self.referring_physician, referring_physician),
            (&mut self.referral_source, referral_source),
            (&mut self.diagnosis_code, diagnosis_code),
        ] {
            if value.is_some() {
                *slot = value;
            }
        }
    }

    /// The birth date control parsed back into a date. `None` when empty.
    pub fn parsed_birth_date(&self) -> Result<Option<jiff::civil::Date>, CoreError> {
        let Some(value) = filled(&self.birth_date) else {
            return Ok(None);
        };
        jiff::civil::Date::strptime(BIRTH_DATE_FORMAT, value)
            .map(Some)
            .map_err(|e| CoreError::InvalidDate {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Age in completed years on `on`.
    pub fn patient_age(&self, on: jiff::civil::Date) -> Result<Option<u32>, CoreError> {
        Ok(self.parsed_birth_date()?.map(|birth| {
            let mut years = on.year() - birth.year();
            if (on.month(), on.day()) < (birth.month(), birth.day()) {
                years -= 1;
            }
            u32::try_from(years).unwrap_or(0)
        }))
    }
}

/// `Some` only for a present, non-blank value.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
