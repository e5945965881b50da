use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FunctionalLevel {
    #[serde(rename = "Independent")]
    Independent,
    #[serde(rename = "Modified Independent")]
    ModifiedIndependent,
    #[serde(rename = "Moderate Assistance")]
    ModerateAssistance,
    #[serde(rename = "Maximum Assistance")]
    MaximumAssistance,
}

impl FunctionalLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionalLevel::Independent => "Independent",
            FunctionalLevel::ModifiedIndependent => "Modified Independent",
            FunctionalLevel::ModerateAssistance => "Moderate Assistance",
            FunctionalLevel::MaximumAssistance => "Maximum Assistance",
        }
    }
}

impl fmt::Display for FunctionalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Prognosis {
    Excellent,
    Good,
    Fair,
    Guarded,
}

impl Prognosis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prognosis::Excellent => "Excellent",
            Prognosis::Good => "Good",
            Prognosis::Fair => "Fair",
            Prognosis::Guarded => "Guarded",
        }
    }
}

impl fmt::Display for Prognosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate summary derived from the scored assessments of one form.
///
/// Never persisted; recomputed from scratch whenever the assessment list
/// changes. The four string lists have set semantics: no duplicates, in
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InsightReport {
    pub average_score: f64,
    pub total_assessments: usize,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub priority_areas: Vec<String>,
    pub functional_level: FunctionalLevel,
    pub prognosis: Prognosis,
}

impl InsightReport {
    pub fn has_priority_area(&self, area: &str) -> bool {
        self.priority_areas.iter().any(|a| a == area)
    }
}
