use std::collections::HashSet;

use intake_core::models::assessment::ScoredAssessment;
use intake_core::models::insight::{FunctionalLevel, InsightReport, Prognosis};

use crate::ranges::{priority_area, reference_range};

/// Scores below this share of the reference range are flagged as concerns.
const CONCERN_BELOW: f64 = 50.0;
/// Scores above this share of the reference range are flagged as strengths.
const STRENGTH_ABOVE: f64 = 80.0;

/// Derive the insight report for a set of entered assessments.
///
/// Unscored rows are ignored. Returns `None` when nothing is scored; callers
/// keep whatever report they had before.
///
/// The average is a plain mean of raw scores. Instruments are not normalised
/// to a common scale first, so a COPM (1–10) and a FIM (18–126) pull the
/// average very differently.
pub fn derive_insights(assessments: &[ScoredAssessment]) -> Option<InsightReport> {
    let scored: Vec<(&ScoredAssessment, f64)> = assessments
        .iter()
        .filter_map(|a| a.usable_score().map(|score| (a, score)))
        .collect();

    if scored.is_empty() {
        return None;
    }

    let total: f64 = scored.iter().map(|(_, score)| score).sum();
    let average = total / scored.len() as f64;

    let band = Band::for_average(average);
    let mut strengths = Vec::new();
    let mut concerns = Vec::new();
    let mut priority_areas: Vec<String> = band.priority_areas.iter().map(|s| s.to_string()).collect();

    match band.seed {
        Seed::Strength(text) => strengths.push(text.to_string()),
        Seed::Concern(text) => concerns.push(text.to_string()),
    }

    for (assessment, score) in &scored {
        if assessment.name.is_empty() {
            continue;
        }

        let percentage = reference_range(lookup_key(assessment)).percentage(*score);
        if percentage < CONCERN_BELOW {
            concerns.push(format!("{}: Below expected level", assessment.name));
            priority_areas.push(priority_area(lookup_key(assessment)).to_string());
        } else if percentage > STRENGTH_ABOVE {
            strengths.push(format!("{}: Above expected level", assessment.name));
        }
    }

    Some(InsightReport {
        average_score: round_to_hundredths(average),
        total_assessments: scored.len(),
        strengths: dedup_in_order(strengths),
        concerns: dedup_in_order(concerns),
        recommendations: dedup_in_order(vec![band.recommendation.to_string()]),
        priority_areas: dedup_in_order(priority_areas),
        functional_level: band.level,
        prognosis: band.prognosis,
    })
}

/// Reference tables are keyed by short code; rows without one fall back
/// to their name.
fn lookup_key(assessment: &ScoredAssessment) -> &str {
    if assessment.code.is_empty() {
        &assessment.name
    } else {
        &assessment.code
    }
}

enum Seed {
    Strength(&'static str),
    Concern(&'static str),
}

struct Band {
    level: FunctionalLevel,
    prognosis: Prognosis,
    seed: Seed,
    recommendation: &'static str,
    priority_areas: &'static [&'static str],
}

impl Band {
    fn for_average(average: f64) -> Self {
        if average >= 80.0 {
            Band {
                level: FunctionalLevel::Independent,
                prognosis: Prognosis::Excellent,
                seed: Seed::Strength("Demonstrates high level of independence"),
                recommendation: "Maintenance program recommended",
                priority_areas: &[],
            }
        } else if average >= 60.0 {
            Band {
                level: FunctionalLevel::ModifiedIndependent,
                prognosis: Prognosis::Good,
                seed: Seed::Strength("Shows good potential for improvement"),
                recommendation: "Continue therapy 2x/week for 4-6 weeks",
                priority_areas: &[],
            }
        } else if average >= 40.0 {
            Band {
                level: FunctionalLevel::ModerateAssistance,
                prognosis: Prognosis::Fair,
                seed: Seed::Concern("Requires moderate assistance with daily tasks"),
                recommendation: "Intensive therapy 3x/week for 6-8 weeks",
                priority_areas: &["Activities of Daily Living"],
            }
        } else {
            Band {
                level: FunctionalLevel::MaximumAssistance,
                prognosis: Prognosis::Guarded,
                seed: Seed::Concern("Requires maximum assistance with most tasks"),
                recommendation: "Comprehensive rehabilitation program",
                priority_areas: &["Basic self-care skills", "Safety awareness"],
            }
        }
    }
}

/// Half-up rounding to two decimals.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
