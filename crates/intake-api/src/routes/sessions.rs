use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};

use intake_core::models::evaluation::SubmissionReceipt;
use intake_core::models::form::FieldUpdate;
use intake_export::json::export_json;
use intake_export::render::render_text;
use intake_export::summary::build_summary;
use intake_session::session::SessionSnapshot;
use intake_session::EvaluationSession;

use crate::error::ApiError;
use crate::state::AppState;

fn not_open(id: &str) -> ApiError {
    ApiError::NotFound(format!("no open session for evaluation: {id}"))
}

/// `Content-Disposition` for a download. Quotes, backslashes and control
/// characters in the name (it carries the patient name) become `_`.
pub fn attachment(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| if c.is_control() || c == '"' || c == '\\' { '_' } else { c })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    token: String,
}

/// Open (or reopen) the form for an evaluation. A failed load still opens
/// the session; the snapshot then carries the error notice.
pub async fn open_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<OpenRequest>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let session = EvaluationSession::open(state.services.clone(), id.clone(), request.token).await;
    let snapshot = session.snapshot();
    state.insert_session(id, session).await;
    (StatusCode::CREATED, Json(snapshot))
}

/// Drop the open form for an evaluation.
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.close_session(&id).await.ok_or_else(|| not_open(&id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let session = session.lock().await;
    Ok(Json(session.snapshot()))
}

pub async fn update_fields(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<FieldUpdate>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    session.update_fields(update);
    Ok(Json(session.snapshot()))
}

/// Body of the single-value address endpoints. A missing or null `value`
/// clears the control.
#[derive(Debug, Default, Deserialize)]
pub struct ValueUpdate {
    #[serde(default)]
    value: Option<String>,
}

pub async fn change_postal_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ValueUpdate>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    session.change_postal_code(update.value).await?;
    Ok(Json(session.snapshot()))
}

pub async fn change_house_number(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ValueUpdate>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    session.change_house_number(update.value).await?;
    Ok(Json(session.snapshot()))
}

pub async fn change_addition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ValueUpdate>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    session.change_addition(update.value);
    Ok(Json(session.snapshot()))
}

pub async fn add_row(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    session.add_row()?;
    Ok((StatusCode::CREATED, Json(session.snapshot())))
}

/// Edits to one assessment row, applied in field order. `score: null`
/// clears the score; an empty `notes` clears the notes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowUpdate {
    assessment_id: Option<u32>,
    #[serde(default, deserialize_with = "present")]
    score: Option<Option<f64>>,
    notes: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

pub async fn update_row(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(update): Json<RowUpdate>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;

    if let Some(assessment_id) = update.assessment_id {
        session.select_assessment_by_id(index, assessment_id).await?;
    }
    if let Some(score) = update.score {
        session.set_score(index, score)?;
    }
    match update.notes {
        Some(notes) if notes.is_empty() => session.clear_notes(index)?,
        Some(notes) => session.set_notes(index, notes)?,
        None => {}
    }
    Ok(Json(session.snapshot()))
}

pub async fn remove_row(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    session.remove_row(index)?;
    Ok(Json(session.snapshot()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    format: ExportFormat,
}

/// Download the evaluation report, dated today.
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let session = session.lock().await;

    let today = jiff::Zoned::now().date();
    let summary = build_summary(
        session.fields(),
        &session.scored_assessments(),
        session.insights(),
        today,
    );
    let file = export_json(&summary)?;

    let (file_name, content_type, body) = match params.format {
        ExportFormat::Json => (file.file_name, file.content_type.to_string(), file.contents),
        ExportFormat::Text => {
            let stem = file.file_name.trim_end_matches(".json");
            (
                format!("{stem}.txt"),
                "text/plain; charset=utf-8".to_string(),
                render_text(&summary)?,
            )
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, attachment(&file_name)),
        ],
        body,
    ))
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    receipt: SubmissionReceipt,
    session: SessionSnapshot,
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let session = state.session(&id).await.ok_or_else(|| not_open(&id))?;
    let mut session = session.lock().await;
    let receipt = session.submit().await?;
    Ok(Json(SubmitResponse {
        receipt,
        session: session.snapshot(),
    }))
}
