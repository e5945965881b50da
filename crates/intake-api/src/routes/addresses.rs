use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use intake_core::models::address::{validate_postal_code, AddressUid, HouseNumberLookup, PostalCodeValidation};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn house_numbers(
    State(state): State<AppState>,
    Path(postal_code): Path<String>,
) -> Result<Json<HouseNumberLookup>, ApiError> {
    let lookup = state.services.addresses.house_numbers(&postal_code).await?;
    Ok(Json(lookup))
}

pub async fn address_uids(
    State(state): State<AppState>,
    Path((postal_code, house_number)): Path<(String, String)>,
) -> Result<Json<Vec<AddressUid>>, ApiError> {
    let uids = state
        .services
        .addresses
        .address_uids(&postal_code, &house_number)
        .await?;
    Ok(Json(uids))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    term: String,
}

pub async fn search_addresses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let matches = state.services.addresses.search(&params.term).await?;
    Ok(Json(matches))
}

pub async fn validate(Path(postal_code): Path<String>) -> Json<PostalCodeValidation> {
    Json(validate_postal_code(&postal_code))
}
