//! intake-api
//!
//! HTTP surface of the evaluation intake: catalog, address lookups,
//! stateless insights and per-evaluation form sessions.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalog
        .route("/assessments", get(routes::assessments::search_assessments))
        .route("/assessments/{id}", get(routes::assessments::get_assessment))
        .route(
            "/assessments/{id}/interpret",
            post(routes::assessments::interpret_assessment),
        )
        // Addresses
        .route(
            "/addresses/postal-codes/{postal_code}",
            get(routes::addresses::house_numbers),
        )
        .route(
            "/addresses/postal-codes/{postal_code}/house-numbers/{house_number}",
            get(routes::addresses::address_uids),
        )
        .route("/addresses/search", get(routes::addresses::search_addresses))
        .route(
            "/addresses/validate/{postal_code}",
            get(routes::addresses::validate),
        )
        .route("/insights", post(routes::insights::derive))
        // Form sessions
        .route(
            "/evaluations/{id}/session",
            post(routes::sessions::open_session)
                .get(routes::sessions::get_session)
                .delete(routes::sessions::close_session),
        )
        .route(
            "/evaluations/{id}/session/fields",
            axum::routing::patch(routes::sessions::update_fields),
        )
        .route(
            "/evaluations/{id}/session/postal-code",
            put(routes::sessions::change_postal_code),
        )
        .route(
            "/evaluations/{id}/session/house-number",
            put(routes::sessions::change_house_number),
        )
        .route(
            "/evaluations/{id}/session/addition",
            put(routes::sessions::change_addition),
        )
        .route(
            "/evaluations/{id}/session/assessments",
            post(routes::sessions::add_row),
        )
        .route(
            "/evaluations/{id}/session/assessments/{index}",
            put(routes::sessions::update_row).delete(routes::sessions::remove_row),
        )
        .route("/evaluations/{id}/session/export", get(routes::sessions::export))
        .route("/evaluations/{id}/session/submit", post(routes::sessions::submit))
        .layer(cors)
        .with_state(state)
}
