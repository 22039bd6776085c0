//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// The URL is stored as submitted; its format is not checked here.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Identifier assigned to the submitted URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
}
