use serde::{Deserialize, Serialize};
use ts_rs::TS;

use intake_core::models::assessment::{AssessmentCategory, AssessmentDefinition};

use crate::error::InsightError;

/// Interpretation shown next to a scored row on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RowInterpretation {
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Significantly Below Average")]
    SignificantlyBelowAverage,
}

impl RowInterpretation {
    pub fn for_percentile(percentile: i64) -> Self {
        if percentile >= 85 {
            RowInterpretation::AboveAverage
        } else if percentile >= 70 {
            RowInterpretation::Average
        } else if percentile >= 50 {
            RowInterpretation::BelowAverage
        } else {
            RowInterpretation::SignificantlyBelowAverage
        }
    }
}

/// Percentile of a score within the row's own declared range, rounded to
/// the nearest whole number. `None` for an empty range.
pub fn row_percentile(score: f64, min: f64, max: f64) -> Option<i64> {
    if max == min || !score.is_finite() {
        return None;
    }
    Some(round_half_up((score - min) / (max - min) * 100.0) as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Severity::Normal
        } else if percentage >= 60.0 {
            Severity::Mild
        } else if percentage >= 40.0 {
            Severity::Moderate
        } else {
            Severity::Severe
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Severity::Normal => "Within normal limits",
            Severity::Mild => "Mild impairment",
            Severity::Moderate => "Moderate impairment",
            Severity::Severe => "Severe impairment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AgeAdjustment {
    pub adjusted_score: f64,
    pub age_group: String,
    pub adjustment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreInterpretation {
    pub assessment_name: String,
    pub raw_score: f64,
    pub percentage: i64,
    pub interpretation: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    pub age_adjusted: Option<AgeAdjustment>,
}

/// Interpret a raw score against the catalog definition's own range.
pub fn interpret_score(
    definition: &AssessmentDefinition,
    score: f64,
    patient_age: Option<u32>,
) -> Result<ScoreInterpretation, InsightError> {
    if definition.max_score == definition.min_score {
        return Err(InsightError::DegenerateRange {
            code: definition.code.clone(),
            min: definition.min_score,
            max: definition.max_score,
        });
    }

    let percentage = (score - definition.min_score)
        / (definition.max_score - definition.min_score)
        * 100.0;
    let severity = Severity::for_percentage(percentage);

    Ok(ScoreInterpretation {
        assessment_name: definition.name.clone(),
        raw_score: score,
        percentage: round_half_up(percentage) as i64,
        interpretation: severity.description().to_string(),
        severity,
        recommendations: recommendations(definition.category, severity)
            .iter()
            .map(|r| r.to_string())
            .collect(),
        age_adjusted: patient_age
            .filter(|age| *age > 0)
            .map(|age| adjust_for_age(score, age, definition.max_score)),
    })
}

fn recommendations(category: AssessmentCategory, severity: Severity) -> &'static [&'static str] {
    use AssessmentCategory::*;
    use Severity::*;

    match (category, severity) {
        (Adl, Mild) => &["Practice with adaptive equipment", "Home safety assessment"],
        (Adl, Moderate) => &["Occupational therapy 2x/week", "Caregiver training"],
        (Adl, Severe) => &["Intensive OT program", "Consider assistive technology"],
        (Cognitive, Mild) => &["Cognitive exercises", "Memory strategies"],
        (Cognitive, Moderate) => &["Cognitive rehabilitation", "Environmental modifications"],
        (Cognitive, Severe) => &["Comprehensive cognitive program", "Caregiver support"],
        (Motor, Mild) => &["Strengthening exercises", "Fine motor activities"],
        (Motor, Moderate) => &["Physical/occupational therapy", "Adaptive equipment"],
        (Motor, Severe) => &["Intensive motor rehabilitation", "Mobility assessment"],
        _ => &["Consult with healthcare provider"],
    }
}

/// Older adults get a flat 10% uplift, capped at the instrument maximum.
/// `adjustment` is measured before the cap.
fn adjust_for_age(score: f64, age: u32, max_score: f64) -> AgeAdjustment {
    let adjusted = if age > 65 { score * 1.1 } else { score };
    AgeAdjustment {
        adjusted_score: adjusted.min(max_score),
        age_group: if age < 65 { "Adult" } else { "Older Adult" }.to_string(),
        adjustment: adjusted - score,
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
