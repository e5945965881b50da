//! intake-insights
//!
//! Score analysis for administered assessments. Pure computation, no I/O.
//! Derives the insight report for a form, turns its priority areas into
//! therapy goals, and interprets individual scores.

pub mod deriver;
pub mod error;
pub mod goals;
pub mod interpret;
pub mod ranges;

pub use deriver::derive_insights;
pub use goals::generate_therapy_goals;
