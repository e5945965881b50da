use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Success,
    Error,
}

/// The single user-facing notification a form shows at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub summary: String,
    pub detail: String,
}

impl Notice {
    pub fn load_failed() -> Self {
        Self::error("Please try again", "Something went wrong!")
    }

    pub fn submit_failed() -> Self {
        Self::error("Error", "Failed to submit evaluation. Please try again.")
    }

    pub fn submitted() -> Self {
        Self {
            severity: NoticeSeverity::Success,
            summary: "Success".to_string(),
            detail: "Evaluation submitted successfully!".to_string(),
        }
    }

    fn error(summary: &str, detail: &str) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            summary: summary.to_string(),
            detail: detail.to_string(),
        }
    }
}
