use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InsightError {
    #[error("assessment '{code}' has an empty score range [{min}, {max}]")]
    DegenerateRange { code: String, min: f64, max: f64 },
}
