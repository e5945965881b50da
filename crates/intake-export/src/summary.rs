use intake_core::models::assessment::ScoredAssessment;
use intake_core::models::form::EvaluationFields;
use intake_core::models::insight::InsightReport;
use intake_core::models::report::{ClinicInfo, EvaluationSummary, PatientInfo, ReferralInfo};
use intake_insights::generate_therapy_goals;

/// Assemble the report for the current form state.
///
/// Only scored rows are reported. Recommendations come from the insight
/// report and goals are generated from its priority areas.
pub fn build_summary(
    fields: &EvaluationFields,
    assessments: &[ScoredAssessment],
    insights: Option<&InsightReport>,
    evaluation_date: jiff::civil::Date,
) -> EvaluationSummary {
    EvaluationSummary {
        patient_info: PatientInfo {
            name: fields.patient_name.clone(),
            id: fields.patient_id.clone(),
            birth_date: fields.birth_date.clone(),
            address: fields.address.clone(),
        },
        clinic_info: ClinicInfo {
            name: fields.clinic_name.clone(),
            therapist: fields.therapist_name.clone(),
            evaluation_date,
        },
        referral_info: ReferralInfo {
            physician: fields.referring_physician.clone(),
            source: fields.referral_source.clone(),
            diagnosis: fields.diagnosis_code.clone(),
        },
        assessment_results: assessments
            .iter()
            .filter(|a| a.score.is_some())
            .cloned()
            .collect(),
        insights: insights.cloned(),
        recommendations: insights
            .map(|report| report.recommendations.clone())
            .unwrap_or_default(),
        goals: generate_therapy_goals(insights),
    }
}
