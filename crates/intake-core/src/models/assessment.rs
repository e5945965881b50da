use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical domain an instrument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentCategory {
    Adl,
    Cognitive,
    Motor,
    Sensory,
    Psychosocial,
    Vocational,
    Environmental,
}

impl AssessmentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentCategory::Adl => "Activities of Daily Living",
            AssessmentCategory::Cognitive => "Cognitive",
            AssessmentCategory::Motor => "Motor Skills",
            AssessmentCategory::Sensory => "Sensory Processing",
            AssessmentCategory::Psychosocial => "Psychosocial",
            AssessmentCategory::Vocational => "Vocational",
            AssessmentCategory::Environmental => "Environmental",
        }
    }
}

/// How an instrument's raw score is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringType {
    Numeric,
    Percentage,
    Ordinal,
    Binary,
}

impl ScoringType {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringType::Numeric => "Numeric Score",
            ScoringType::Percentage => "Percentage",
            ScoringType::Ordinal => "Ordinal Scale",
            ScoringType::Binary => "Pass/Fail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

/// A standardized instrument available in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentDefinition {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub category: AssessmentCategory,
    pub description: String,
    pub max_score: f64,
    pub min_score: f64,
    pub scoring_type: ScoringType,
    pub is_standardized: bool,
    pub age_range: AgeRange,
    /// Minutes.
    pub administration_time: u32,
    pub instructions: String,
}

impl AssessmentDefinition {
    /// Case-insensitive substring match over name or code.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword) || self.code.to_lowercase().contains(&keyword)
    }
}

/// Autocomplete entry: the catalog definition flattened with its category label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentOption {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub category: String,
    pub max_score: f64,
    pub min_score: f64,
}

impl From<&AssessmentDefinition> for AssessmentOption {
    fn from(definition: &AssessmentDefinition) -> Self {
        Self {
            id: definition.id,
            name: definition.name.clone(),
            code: definition.code.clone(),
            category: definition.category.label().to_string(),
            max_score: definition.max_score,
            min_score: definition.min_score,
        }
    }
}

/// Catalog search parameters. Pages are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub category: Option<AssessmentCategory>,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

impl Default for AssessmentQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            page: default_page(),
            page_size: default_page_size(),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentPage {
    pub data: Vec<AssessmentDefinition>,
    pub total_count: usize,
    pub page: usize,
    pub page_number: usize,
}

/// One administered test as entered on the form.
///
/// A `None` score means "not yet scored" and keeps the row out of every
/// aggregate computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoredAssessment {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub max_score: f64,
    #[serde(default)]
    pub min_score: f64,
    #[serde(default)]
    pub notes: String,
}

impl ScoredAssessment {
    pub fn from_definition(definition: &AssessmentDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            code: definition.code.clone(),
            category: Some(definition.category.label().to_string()),
            score: None,
            max_score: definition.max_score,
            min_score: definition.min_score,
            notes: String::new(),
        }
    }

    /// The score, if one is present and usable for arithmetic.
    pub fn usable_score(&self) -> Option<f64> {
        self.score.filter(|s| s.is_finite())
    }
}
