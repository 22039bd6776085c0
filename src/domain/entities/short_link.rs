//! Short link record persisted by the allocator.

use serde::{Deserialize, Serialize};

/// A persisted mapping from a short identifier to a submitted URL.
///
/// `id` is the unique key in the backing store. `clicks` starts at zero and is
/// only ever changed by the redirect path, which lives outside this crate.
/// `created_at` is an epoch timestamp in milliseconds, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRecord {
    pub id: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: i64,
}

impl ShortLinkRecord {
    /// Builds a fresh record for a candidate identifier with a zero click count.
    pub fn new(id: impl Into<String>, url: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            clicks: 0,
            created_at,
        }
    }
}
