pub mod addresses;
pub mod assessments;
pub mod health;
pub mod insights;
pub mod sessions;
