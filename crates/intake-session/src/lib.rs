//! intake-session
//!
//! The evaluation form as an explicit state object. Every mutation goes
//! through [`EvaluationSession`], which recomputes the insight report
//! synchronously whenever the assessment rows change.

pub mod error;
pub mod notice;
pub mod row;
pub mod services;
pub mod session;
pub mod validation;

pub use error::SessionError;
pub use services::Services;
pub use session::EvaluationSession;
