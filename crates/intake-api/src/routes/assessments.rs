use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use intake_core::models::assessment::{
    AssessmentCategory, AssessmentDefinition, AssessmentPage, AssessmentQuery,
};
use intake_insights::interpret::{interpret_score, ScoreInterpretation};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    keyword: String,
    page: Option<usize>,
    page_size: Option<usize>,
    category: Option<AssessmentCategory>,
}

pub async fn search_assessments(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<AssessmentPage>, ApiError> {
    let defaults = AssessmentQuery::default();
    let query = AssessmentQuery {
        keyword: params.keyword,
        page: params.page.unwrap_or(defaults.page),
        page_size: params.page_size.unwrap_or(defaults.page_size),
        category: params.category,
    };
    if query.page == 0 || query.page_size == 0 {
        return Err(ApiError::BadRequest(
            "page and page_size start at 1".to_string(),
        ));
    }

    let page = state.services.catalog.search(&query).await?;
    Ok(Json(page))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<AssessmentDefinition>, ApiError> {
    let definition = state.services.catalog.get(id).await?;
    Ok(Json(definition))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretRequest {
    score: f64,
    patient_age: Option<u32>,
}

pub async fn interpret_assessment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(request): Json<InterpretRequest>,
) -> Result<Json<ScoreInterpretation>, ApiError> {
    let definition = state.services.catalog.get(id).await?;
    let interpretation = interpret_score(&definition, request.score, request.patient_age)?;
    Ok(Json(interpretation))
}
