use axum::Json;
use serde::{Deserialize, Serialize};

use intake_core::models::assessment::ScoredAssessment;
use intake_core::models::insight::InsightReport;
use intake_insights::{derive_insights, generate_therapy_goals};

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    assessments: Vec<ScoredAssessment>,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    insights: Option<InsightReport>,
    goals: Vec<String>,
}

/// Stateless derivation over a set of rows; `insights` is null when none
/// of them carries a score.
pub async fn derive(Json(request): Json<InsightRequest>) -> Json<InsightResponse> {
    let insights = derive_insights(&request.assessments);
    let goals = generate_therapy_goals(insights.as_ref());
    Json(InsightResponse { insights, goals })
}
