use serde::{Deserialize, Serialize};

use intake_core::models::assessment::{AssessmentDefinition, ScoredAssessment};
use intake_insights::interpret::{row_percentile, RowInterpretation};

/// One assessment line on the form.
///
/// A row starts empty and disabled; choosing an instrument fills in its
/// name, code, category and declared range and enables the score and
/// notes inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRow {
    #[serde(flatten)]
    pub assessment: ScoredAssessment,
    pub percentile: Option<i64>,
    pub interpretation: Option<RowInterpretation>,
    pub enabled: bool,
}

impl AssessmentRow {
    pub fn select(&mut self, definition: &AssessmentDefinition) {
        let notes = std::mem::take(&mut self.assessment.notes);
        let score = self.assessment.score;
        self.assessment = ScoredAssessment {
            score,
            notes,
            ..ScoredAssessment::from_definition(definition)
        };
        self.enabled = true;
        self.refresh_interpretation();
    }

    pub fn set_score(&mut self, score: Option<f64>) {
        self.assessment.score = score;
        self.refresh_interpretation();
    }

    /// Percentile against the row's own declared range. Left as it was
    /// when there is no score to interpret.
    fn refresh_interpretation(&mut self) {
        let Some(score) = self.assessment.score else {
            return;
        };
        if let Some(percentile) =
            row_percentile(score, self.assessment.min_score, self.assessment.max_score)
        {
            self.percentile = Some(percentile);
            self.interpretation = Some(RowInterpretation::for_percentile(percentile));
        }
    }

    /// Name present and, once enabled, a score of at least zero.
    pub fn is_valid(&self) -> bool {
        if self.assessment.name.trim().is_empty() {
            return false;
        }
        !self.enabled || self.assessment.score.is_some_and(|s| s >= 0.0)
    }
}
