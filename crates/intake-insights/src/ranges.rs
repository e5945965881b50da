use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Score range an instrument is measured against when deriving insights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    /// Used for instruments missing from the table.
    pub const FALLBACK: ReferenceRange = ReferenceRange { min: 0.0, max: 100.0 };

    /// Position of `score` within the range, as a percentage. Not clamped:
    /// scores outside the range land below 0 or above 100.
    pub fn percentage(&self, score: f64) -> f64 {
        (score - self.min) / (self.max - self.min) * 100.0
    }
}

/// Reference range for an instrument short code.
///
/// This table is independent of the min/max an assessment row declares for
/// itself; insight derivation only ever consults this one.
pub fn reference_range(code: &str) -> ReferenceRange {
    let (min, max) = match code {
        "COPM" => (1.0, 10.0),
        "FIM" => (18.0, 126.0),
        "MoCA" => (0.0, 30.0),
        "NHPT" => (10.0, 300.0),
        "SP" => (40.0, 200.0),
        _ => return ReferenceRange::FALLBACK,
    };
    ReferenceRange { min, max }
}

/// Clinical domain flagged when an instrument scores low.
pub fn priority_area(code: &str) -> &'static str {
    match code {
        "COPM" => "Occupational Performance",
        "FIM" => "Activities of Daily Living",
        "MoCA" => "Cognitive Function",
        "NHPT" => "Motor Skills",
        "SP" => "Sensory Processing",
        _ => "General Function",
    }
}
