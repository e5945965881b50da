//! intake-export
//!
//! The downloadable evaluation report: summary assembly, JSON export and
//! plain-text rendering.

pub mod error;
pub mod json;
pub mod render;
pub mod summary;
