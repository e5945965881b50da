use intake_core::models::insight::InsightReport;

/// Goal templates per priority area, in the order goals are emitted.
const GOAL_TEMPLATES: &[(&str, [&str; 2])] = &[
    (
        "Activities of Daily Living",
        [
            "Patient will demonstrate independence in dressing tasks within 4 weeks",
            "Patient will safely perform kitchen tasks with minimal assistance within 6 weeks",
        ],
    ),
    (
        "Motor Skills",
        [
            "Patient will improve fine motor coordination by 25% within 6 weeks",
            "Patient will demonstrate improved grip strength within 4 weeks",
        ],
    ),
    (
        "Cognitive Function",
        [
            "Patient will improve attention span for functional tasks within 4 weeks",
            "Patient will demonstrate improved memory strategies within 6 weeks",
        ],
    ),
    (
        "Sensory Processing",
        [
            "Patient will demonstrate improved sensory tolerance within 4 weeks",
            "Patient will use sensory strategies independently within 6 weeks",
        ],
    ),
];

const FALLBACK_GOALS: [&str; 2] = [
    "Patient will improve overall functional independence within 6 weeks",
    "Patient will demonstrate improved quality of life measures within 8 weeks",
];

/// Turn the priority areas of a report into therapy goals.
///
/// Areas without a template contribute nothing. When no goal comes out at
/// all (no report, no areas, or only untemplated ones) the two generic
/// goals are returned instead.
pub fn generate_therapy_goals(insights: Option<&InsightReport>) -> Vec<String> {
    let mut goals: Vec<String> = match insights {
        Some(report) => GOAL_TEMPLATES
            .iter()
            .filter(|(area, _)| report.has_priority_area(area))
            .flat_map(|(_, templates)| templates.iter().map(|g| g.to_string()))
            .collect(),
        None => Vec::new(),
    };

    if goals.is_empty() {
        goals.extend(FALLBACK_GOALS.iter().map(|g| g.to_string()));
    }
    goals
}
