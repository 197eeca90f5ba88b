//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! reading service for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::NaiveDate;

use super::dto::{BirthDateQuery, BirthDateRequest, HealthResponse, KinResponse, WelcomeResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Service info
// =============================================================================

/// GET /
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Maya Tzolk'in API. Request a reading at /v1/kin?birth_date=YYYY-MM-DD."
            .to_string(),
    })
}

/// GET /health
///
/// Health check endpoint; also reports whether a remote generator is configured.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let generator = if state.reading.composer().has_generator() {
        "enabled"
    } else {
        "disabled"
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        generator: generator.to_string(),
    }))
}

// =============================================================================
// Kin readings
// =============================================================================

/// GET /v1/kin?birth_date=YYYY-MM-DD
///
/// Compute the kin reading for a birth date given as a query parameter.
pub async fn get_kin(
    State(state): State<AppState>,
    query: Result<Query<BirthDateQuery>, QueryRejection>,
) -> HandlerResult<KinResponse> {
    let Query(query) = query?;
    reading_response(&state, query.birth_date).await
}

/// POST /v1/kin
///
/// Compute the kin reading for a birth date given in a JSON body.
pub async fn post_kin(
    State(state): State<AppState>,
    body: Result<Json<BirthDateRequest>, JsonRejection>,
) -> HandlerResult<KinResponse> {
    let Json(request) = body?;
    reading_response(&state, request.birth_date).await
}

async fn reading_response(state: &AppState, birth_date: NaiveDate) -> HandlerResult<KinResponse> {
    let reading = state.reading.read(birth_date).await;
    Ok(Json(reading.into()))
}
