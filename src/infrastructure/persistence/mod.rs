//! Record store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::RecordStore`].
//! Each one maps its backend's native "insert if absent" primitive onto the
//! conflict / store-error split the allocator relies on.
//!
//! # Stores
//!
//! - [`InMemoryRecordStore`] - Process-local map, for development and tests
//! - [`PgRecordStore`] - PostgreSQL primary-key insert
//! - [`RedisRecordStore`] - Redis `SET NX`

pub mod memory_record_store;
pub mod pg_record_store;
pub mod redis_record_store;

pub use memory_record_store::InMemoryRecordStore;
pub use pg_record_store::PgRecordStore;
pub use redis_record_store::RedisRecordStore;
