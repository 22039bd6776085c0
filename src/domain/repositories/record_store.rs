//! Repository trait for conditional creation of short link records.

use crate::domain::entities::ShortLinkRecord;
use crate::domain::errors::CreateError;
use async_trait::async_trait;

/// Storage adapter offering a single atomic "insert if key absent" write.
///
/// Implementations must perform the existence check and the insert as one
/// backend operation. A separate read followed by a write is not acceptable:
/// concurrent allocators rely on this call alone for uniqueness.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRecordStore`] - process-local map
/// - [`crate::infrastructure::persistence::PgRecordStore`] - PostgreSQL `INSERT`
/// - [`crate::infrastructure::persistence::RedisRecordStore`] - Redis `SET NX`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists `record` under `key` unless an entry with that key exists.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::Conflict`] if `key` is already taken.
    ///
    /// Returns [`CreateError::Store`] for every other failure.
    async fn create_if_absent(&self, key: &str, record: &ShortLinkRecord)
    -> Result<(), CreateError>;
}
