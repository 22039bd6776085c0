//! Redis implementation of the record store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

use crate::domain::entities::ShortLinkRecord;
use crate::domain::errors::{ConflictError, CreateError, StoreError};
use crate::domain::repositories::RecordStore;

const BACKEND: &str = "redis";

/// Redis record store.
///
/// Records are stored as JSON strings under `<prefix><id>`. Creation is a
/// single `SET key value NX`: Redis answers `OK` when the key was written and
/// nil when it already existed, which is the conflict signal.
pub struct RedisRecordStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisRecordStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the URL is invalid, the connection cannot be
    /// established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis record store");

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::with_source(BACKEND, "failed to create client", e))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::with_source(BACKEND, "failed to connect", e))?;

        let store = Self::with_connection(manager, key_prefix);
        store.ping().await?;

        info!("✓ Connected to Redis");
        Ok(store)
    }

    /// Wraps an existing connection manager.
    pub fn with_connection(conn: ConnectionManager, key_prefix: &str) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.to_string(),
        }
    }

    /// Checks connectivity with PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if Redis does not answer.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::with_source(BACKEND, "PING failed", e))
    }

    fn build_key(&self, id: &str) -> String {
        build_key(&self.key_prefix, id)
    }
}

/// Namespaced Redis key for a short identifier.
fn build_key(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, id)
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn create_if_absent(
        &self,
        key: &str,
        record: &ShortLinkRecord,
    ) -> Result<(), CreateError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| StoreError::with_source(BACKEND, "failed to encode record", e))?;

        let redis_key = self.build_key(key);
        let mut conn = self.conn.clone();

        let reply: Option<String> = redis::cmd("SET")
            .arg(&redis_key)
            .arg(payload)
            .arg("NX")
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Redis SET NX failed for {}: {}", redis_key, e);
                StoreError::with_source(BACKEND, "SET NX failed", e)
            })?;

        set_nx_outcome(key, reply)
    }
}

/// Maps a `SET ... NX` reply to the create outcome: `OK` means written, nil
/// means the key was already taken.
fn set_nx_outcome(key: &str, reply: Option<String>) -> Result<(), CreateError> {
    match reply {
        Some(_) => Ok(()),
        None => {
            debug!("Redis conflict on {}", key);
            Err(ConflictError::new(key, "key already exists").into())
        }
    }
}
