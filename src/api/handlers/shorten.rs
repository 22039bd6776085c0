//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::errors::AllocationError;
use crate::error::AppError;
use crate::state::AppState;

/// Allocates a short identifier for a URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": "Xk3_a" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not JSON or has no string `url`
/// - 409 Conflict if no free identifier was found within the retry budget
/// - 503 Service Unavailable if the record store failed
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let record = state
        .allocator
        .allocate(&request.url)
        .await
        .map_err(|e| {
            match &e {
                AllocationError::RetriesExhausted { .. } => tracing::warn!("{}", e),
                AllocationError::Store(err) => tracing::error!(error = ?err, "Allocation failed"),
            }
            AppError::from(e)
        })?;

    tracing::info!("Allocated {} for {}", record.id, record.url);

    Ok((StatusCode::CREATED, Json(ShortenResponse { id: record.id })))
}
