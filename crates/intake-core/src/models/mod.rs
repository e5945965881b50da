pub mod address;
pub mod assessment;
pub mod evaluation;
pub mod form;
pub mod insight;
pub mod report;
