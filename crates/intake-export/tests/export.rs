use intake_core::models::assessment::ScoredAssessment;
use intake_core::models::form::EvaluationFields;
use intake_export::error::ExportError;
use intake_export::json::{export_json, file_name};
use intake_export::render::{render_template, render_text};
use intake_export::summary::build_summary;
use intake_insights::derive_insights;

fn fields() -> EvaluationFields {
    EvaluationFields {
        clinic_name: Some("Springfield Rehabilitation Center".to_string()),
        therapist_name: Some("Alex Morgan".to_string()),
        patient_name: Some("John Doe".to_string()),
        patient_id: Some("12345".to_string()),
        birth_date: Some("15-05-1980".to_string()),
        address: Some("Main Street, 123, A, 12345".to_string()),
        referring_physician: Some("Dr. Patel".to_string()),
        referral_source: Some("Physician".to_string()),
        ..EvaluationFields::default()
    }
}

fn rows() -> Vec<ScoredAssessment> {
    vec![
        ScoredAssessment {
            name: "Functional Independence Measure".to_string(),
            code: "FIM".to_string(),
            score: Some(20.0),
            ..ScoredAssessment::default()
        },
        ScoredAssessment {
            name: "Montreal Cognitive Assessment".to_string(),
            code: "MoCA".to_string(),
            score: None,
            ..ScoredAssessment::default()
        },
    ]
}

fn date() -> jiff::civil::Date {
    jiff::civil::date(2026, 10, 17)
}

#[test]
fn summary_reports_scored_rows_and_derived_goals() {
    let rows = rows();
    let insights = derive_insights(&rows);
    let summary = build_summary(&fields(), &rows, insights.as_ref(), date());

    assert_eq!(summary.assessment_results.len(), 1);
    assert_eq!(summary.assessment_results[0].code, "FIM");
    assert_eq!(summary.recommendations, ["Comprehensive rehabilitation program"]);
    assert_eq!(
        summary.goals[0],
        "Patient will demonstrate independence in dressing tasks within 4 weeks"
    );
    assert_eq!(summary.clinic_info.therapist.as_deref(), Some("Alex Morgan"));
}

#[test]
fn summary_without_insights_falls_back() {
    let summary = build_summary(&fields(), &[], None, date());
    assert!(summary.recommendations.is_empty());
    assert_eq!(summary.goals.len(), 2);
    assert!(summary.insights.is_none());
}

#[test]
fn json_export_uses_report_shape_and_file_name() {
    let rows = rows();
    let insights = derive_insights(&rows);
    let summary = build_summary(&fields(), &rows, insights.as_ref(), date());
    let file = export_json(&summary).unwrap();

    assert_eq!(file.file_name, "OT_Evaluation_John Doe_2026-10-17.json");
    assert_eq!(file.content_type, "application/json");

    let json: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
    for key in [
        "patientInfo",
        "clinicInfo",
        "referralInfo",
        "assessmentResults",
        "insights",
        "recommendations",
        "goals",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["clinicInfo"]["evaluationDate"], "2026-10-17");
    assert_eq!(json["patientInfo"]["birthDate"], "15-05-1980");
    assert_eq!(json["referralInfo"]["diagnosis"], serde_json::Value::Null);
    assert_eq!(json["insights"]["functionalLevel"], "Maximum Assistance");
}

#[test]
fn file_name_without_patient() {
    assert_eq!(file_name(None, date()), "OT_Evaluation_Unknown_2026-10-17.json");
    assert_eq!(file_name(Some(""), date()), "OT_Evaluation_Unknown_2026-10-17.json");
}

#[test]
fn text_rendering_lists_results_and_goals() {
    let rows = rows();
    let insights = derive_insights(&rows);
    let summary = build_summary(&fields(), &rows, insights.as_ref(), date());
    let text = render_text(&summary).unwrap();

    assert!(text.starts_with("OT Evaluation Summary"));
    assert!(text.contains("Patient: John Doe (ID 12345)"));
    assert!(text.contains("- Functional Independence Measure (FIM): 20"));
    assert!(text.contains("Functional level: Maximum Assistance"));
    assert!(text.contains("Concern: Functional Independence Measure: Below expected level"));
    assert!(text.contains("Diagnosis: -"));
    assert!(text.contains("- Patient will demonstrate independence in dressing tasks within 4 weeks"));
}

#[test]
fn text_rendering_without_scores() {
    let summary = build_summary(&fields(), &[], None, date());
    let text = render_text(&summary).unwrap();
    assert!(text.contains("- none scored"));
    assert!(!text.contains("Functional level:"));
    assert!(text.contains("- Patient will improve overall functional independence within 6 weeks"));
}

#[test]
fn custom_templates_render_and_bad_ones_fail_to_parse() {
    let summary = build_summary(&fields(), &[], None, date());
    let text = render_template("custom.txt", "{{ patient_name }} on {{ evaluation_date }}", &summary).unwrap();
    assert_eq!(text, "John Doe on 2026-10-17");

    let err = render_template("broken.txt", "{% for %}", &summary).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
