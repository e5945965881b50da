use intake_core::models::insight::{FunctionalLevel, InsightReport, Prognosis};
use intake_insights::{derive_insights, generate_therapy_goals};
use intake_core::models::assessment::ScoredAssessment;

fn report_with_areas(areas: &[&str]) -> InsightReport {
    InsightReport {
        average_score: 50.0,
        total_assessments: 1,
        strengths: vec![],
        concerns: vec![],
        recommendations: vec![],
        priority_areas: areas.iter().map(|a| a.to_string()).collect(),
        functional_level: FunctionalLevel::ModerateAssistance,
        prognosis: Prognosis::Fair,
    }
}

const FALLBACK: [&str; 2] = [
    "Patient will improve overall functional independence within 6 weeks",
    "Patient will demonstrate improved quality of life measures within 8 weeks",
];

#[test]
fn no_priority_areas_gives_the_two_fallback_goals() {
    assert_eq!(generate_therapy_goals(Some(&report_with_areas(&[]))), FALLBACK);
}

#[test]
fn no_report_gives_the_two_fallback_goals() {
    assert_eq!(generate_therapy_goals(None), FALLBACK);
}

#[test]
fn untemplated_areas_fall_back_too() {
    let report = report_with_areas(&["Safety awareness", "General Function"]);
    assert_eq!(generate_therapy_goals(Some(&report)), FALLBACK);
}

#[test]
fn each_templated_area_adds_two_goals_in_template_order() {
    let report = report_with_areas(&["Sensory Processing", "Activities of Daily Living"]);
    let goals = generate_therapy_goals(Some(&report));
    assert_eq!(
        goals,
        [
            "Patient will demonstrate independence in dressing tasks within 4 weeks",
            "Patient will safely perform kitchen tasks with minimal assistance within 6 weeks",
            "Patient will demonstrate improved sensory tolerance within 4 weeks",
            "Patient will use sensory strategies independently within 6 weeks",
        ]
    );
}

#[test]
fn derived_low_motor_score_yields_motor_goals() {
    let report = derive_insights(&[ScoredAssessment {
        name: "Nine-Hole Peg Test".to_string(),
        code: "NHPT".to_string(),
        score: Some(90.0),
        ..ScoredAssessment::default()
    }])
    .unwrap();

    let goals = generate_therapy_goals(Some(&report));
    assert!(goals.contains(&"Patient will improve fine motor coordination by 25% within 6 weeks".to_string()));
    assert!(goals.contains(&"Patient will demonstrate improved grip strength within 4 weeks".to_string()));
}
