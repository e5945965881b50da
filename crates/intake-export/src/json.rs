use intake_core::models::report::EvaluationSummary;

use crate::error::ExportError;

/// A rendered export, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub contents: String,
}

/// `OT_Evaluation_<patient>_<YYYY-MM-DD>.json`
pub fn file_name(patient_name: Option<&str>, date: jiff::civil::Date) -> String {
    let patient = patient_name.filter(|n| !n.is_empty()).unwrap_or("Unknown");
    format!("OT_Evaluation_{patient}_{date}.json")
}

/// Pretty-printed JSON export of a summary, named after the patient and
/// the evaluation date.
pub fn export_json(summary: &EvaluationSummary) -> Result<ExportedFile, ExportError> {
    let contents = serde_json::to_string_pretty(summary)?;
    let file_name = file_name(
        summary.patient_info.name.as_deref(),
        summary.clinic_info.evaluation_date,
    );
    tracing::debug!(%file_name, bytes = contents.len(), "evaluation exported");

    Ok(ExportedFile {
        file_name,
        content_type: "application/json",
        contents,
    })
}
