//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::entities::ShortLinkRecord;
use crate::domain::errors::{ConflictError, CreateError, StoreError};
use crate::domain::repositories::RecordStore;
use crate::utils::sql_identifier::{is_valid_identifier, quote};

const BACKEND: &str = "postgres";

/// PostgreSQL record store.
///
/// Each create is a single `INSERT ... ON CONFLICT (key) DO NOTHING`, so the
/// uniqueness check and the write are one statement. Zero affected rows is the
/// conflict signal, whatever the key constraint happens to be named.
///
/// Table and key column names are configurable; they are validated on
/// construction and emitted quoted.
pub struct PgRecordStore {
    pool: Arc<PgPool>,
    table: String,
    key_column: String,
    insert_sql: String,
}

impl PgRecordStore {
    /// Creates a store writing to `table`, keyed by `key_column`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either name is not a valid identifier.
    pub fn new(pool: Arc<PgPool>, table: &str, key_column: &str) -> Result<Self, StoreError> {
        for name in [table, key_column] {
            if !is_valid_identifier(name) {
                return Err(StoreError::new(
                    BACKEND,
                    format!("invalid SQL identifier '{}'", name),
                ));
            }
        }

        let insert_sql = format!(
            "INSERT INTO {} ({}, url, clicks, created_at) VALUES ($1, $2, $3, $4) \
             ON CONFLICT ({}) DO NOTHING",
            quote(table),
            quote(key_column),
            quote(key_column)
        );

        Ok(Self {
            pool,
            table: table.to_string(),
            key_column: key_column.to_string(),
            insert_sql,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Creates the backing table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                {} TEXT PRIMARY KEY,
                url TEXT NOT NULL,
                clicks BIGINT NOT NULL DEFAULT 0,
                created_at BIGINT NOT NULL
            )
            "#,
            quote(&self.table),
            quote(&self.key_column)
        );

        sqlx::query(&sql)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StoreError::with_source(BACKEND, "failed to create table", e))?;

        info!("Table {} ready", self.table);
        Ok(())
    }

    /// Checks connectivity with a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database is unreachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StoreError::with_source(BACKEND, "connection check failed", e))?;
        Ok(())
    }
}

/// Maps the affected row count of an insert to the create outcome.
fn insert_outcome(key: &str, rows_affected: u64) -> Result<(), CreateError> {
    if rows_affected == 0 {
        debug!("Postgres conflict on {}", key);
        return Err(ConflictError::new(key, "key already exists").into());
    }
    Ok(())
}

/// Maps a failed insert to a store error.
fn insert_failure(key: &str, e: sqlx::Error) -> CreateError {
    error!("Postgres insert failed for {}: {}", key, e);
    StoreError::with_source(BACKEND, "insert failed", e).into()
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create_if_absent(
        &self,
        key: &str,
        record: &ShortLinkRecord,
    ) -> Result<(), CreateError> {
        let result = sqlx::query(&self.insert_sql)
            .bind(key)
            .bind(&record.url)
            .bind(record.clicks)
            .bind(record.created_at)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| insert_failure(key, e))?;

        insert_outcome(key, result.rows_affected())
    }
}
