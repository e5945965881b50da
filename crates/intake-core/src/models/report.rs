use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::ScoredAssessment;
use super::insight::InsightReport;

/// The downloadable evaluation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EvaluationSummary {
    pub patient_info: PatientInfo,
    pub clinic_info: ClinicInfo,
    pub referral_info: ReferralInfo,
    pub assessment_results: Vec<ScoredAssessment>,
    pub insights: Option<InsightReport>,
    pub recommendations: Vec<String>,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientInfo {
    pub name: Option<String>,
    pub id: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicInfo {
    pub name: Option<String>,
    pub therapist: Option<String>,
    pub evaluation_date: jiff::civil::Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReferralInfo {
    pub physician: Option<String>,
    pub source: Option<String>,
    pub diagnosis: Option<String>,
}
