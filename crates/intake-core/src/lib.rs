//! intake-core
//!
//! Pure domain types for the OT evaluation intake: assessment catalog
//! entries, evaluation payloads, addresses, insight reports and the static
//! reference tables. No I/O; this is the shared vocabulary of the intake system.

pub mod error;
pub mod models;
pub mod reference;
