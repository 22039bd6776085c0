//! Process-local record store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortLinkRecord;
use crate::domain::errors::{ConflictError, CreateError};
use crate::domain::repositories::RecordStore;

/// In-memory record store for local runs and tests.
///
/// The existence check and the insert happen under a single write guard, which
/// makes `create_if_absent` atomic with respect to other callers in the same
/// process. Records are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, ShortLinkRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<ShortLinkRecord> {
        self.records.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_if_absent(
        &self,
        key: &str,
        record: &ShortLinkRecord,
    ) -> Result<(), CreateError> {
        let mut records = self.records.write().await;

        match records.entry(key.to_string()) {
            Entry::Occupied(_) => {
                debug!("Memory store conflict on {}", key);
                Err(ConflictError::new(key, "record already exists").into())
            }
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_if_absent_inserts_record() {
        let store = InMemoryRecordStore::new();
        let record = ShortLinkRecord::new("abc12", "https://example.com", 1);

        store.create_if_absent("abc12", &record).await.unwrap();

        assert_eq!(store.get("abc12").await, Some(record));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_if_absent_rejects_existing_key() {
        let store = InMemoryRecordStore::new();
        let first = ShortLinkRecord::new("abc12", "https://first.com", 1);
        let second = ShortLinkRecord::new("abc12", "https://second.com", 2);

        store.create_if_absent("abc12", &first).await.unwrap();
        let err = store.create_if_absent("abc12", &second).await.unwrap_err();

        match err {
            CreateError::Conflict(conflict) => assert_eq!(conflict.key, "abc12"),
            other => panic!("expected conflict, got {other:?}"),
        }

        // The original record is untouched.
        assert_eq!(store.get("abc12").await.unwrap().url, "https://first.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = InMemoryRecordStore::new();

        assert!(store.is_empty().await);
        assert!(store.get("missing").await.is_none());
    }
}
