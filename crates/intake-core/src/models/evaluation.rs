use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::insight::InsightReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationType {
    Initial,
    Reassessment,
    Discharge,
    Progress,
    Screening,
}

impl EvaluationType {
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationType::Initial => "Initial Evaluation",
            EvaluationType::Reassessment => "Reassessment",
            EvaluationType::Discharge => "Discharge Evaluation",
            EvaluationType::Progress => "Progress Note",
            EvaluationType::Screening => "Screening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TherapistType {
    #[serde(rename = "OT")]
    Occupational,
    #[serde(rename = "PT")]
    Physical,
    #[serde(rename = "ST")]
    Speech,
}

impl TherapistType {
    pub fn label(&self) -> &'static str {
        match self {
            TherapistType::Occupational => "Occupational Therapist",
            TherapistType::Physical => "Physical Therapist",
            TherapistType::Speech => "Speech Therapist",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EvaluationStatus {
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl EvaluationStatus {
    pub fn from_complete(is_complete: bool) -> Self {
        if is_complete {
            EvaluationStatus::Completed
        } else {
            EvaluationStatus::InProgress
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EvaluationStatus::Completed => "Completed",
            EvaluationStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientAddress {
    pub address_id: u32,
    pub postal_code: String,
    pub house_number: u32,
    pub house_number_addition: Option<String>,
    pub full_address: String,
    pub street: String,
    pub city: String,
    pub is_default: bool,
    #[serde(rename = "type")]
    pub kind: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Evaluation metadata loaded when the form opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationDetail {
    pub evaluation_id: String,
    pub patient_id: u64,
    pub patient_client_id: u64,
    pub clinic_client_id: u64,
    pub clinic_id: u64,
    pub full_name: String,
    pub initial: String,
    pub last_name: String,
    pub gender: String,
    pub birth_date: jiff::civil::Date,
    pub evaluation_date: jiff::Timestamp,
    pub therapist_type: TherapistType,
    pub evaluation_type: EvaluationType,
    pub is_complete: bool,
    pub clinic_name: String,
    pub clinic_license: u64,
    pub default_patient_address: PatientAddress,
}

/// One assessment row as it travels in the submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSubmission {
    pub assessment_name: String,
    pub assessment_code: String,
    pub score: Option<f64>,
    pub notes: String,
}

/// The `evaluationRequest` object of a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationRequest {
    pub clinic_name: String,
    pub clinic_license: String,
    pub therapist_name: String,
    pub patient_name: String,
    pub patient_gender: String,
    pub patient_initials: String,
    pub patient_id: String,
    pub client_id: String,
    pub birth_date: String,
    pub address: String,
    pub house_number: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
    pub addition: String,
    pub referral_source: Option<String>,
    pub referring_physician: String,
    pub diagnosis_code: Option<String>,
    pub assessments: Vec<AssessmentSubmission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationSubmission {
    pub evaluation_request: EvaluationRequest,
    pub evaluation_id: String,
}

/// What the gateway reports back after accepting a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub data: serde_json::Value,
}
