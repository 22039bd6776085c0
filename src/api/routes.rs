//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Shortening routes.
///
/// # Endpoints
///
/// - `POST /` - Allocate a short identifier for a URL
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/", post(shorten_handler))
}
