//! Record store tests against live backends.
//!
//! Run with `DATABASE_URL` / `REDIS_URL` set:
//!
//! ```bash
//! cargo test --test repository_record_store -- --ignored
//! ```

mod common;

use sqlx::PgPool;
use std::sync::Arc;

use shortlink::domain::entities::ShortLinkRecord;
use shortlink::domain::errors::{AllocationError, CreateError};
use shortlink::domain::repositories::RecordStore;
use shortlink::infrastructure::persistence::{PgRecordStore, RedisRecordStore};

async fn pg_store(pool: PgPool, table: &str, key: &str) -> PgRecordStore {
    let store = PgRecordStore::new(Arc::new(pool), table, key).unwrap();
    store.ensure_schema().await.unwrap();
    store
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_create_if_absent(pool: PgPool) {
    let store = pg_store(pool.clone(), "short_links", "id").await;
    let record = ShortLinkRecord::new("abc12", "https://example.com", common::TS);

    store.create_if_absent("abc12", &record).await.unwrap();

    let (url, clicks, created_at): (String, i64, i64) =
        sqlx::query_as(r#"SELECT url, clicks, created_at FROM short_links WHERE id = $1"#)
            .bind("abc12")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(url, "https://example.com");
    assert_eq!(clicks, 0);
    assert_eq!(created_at, common::TS);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_duplicate_key_is_conflict(pool: PgPool) {
    let store = pg_store(pool.clone(), "short_links", "id").await;
    let first = ShortLinkRecord::new("abc12", "https://first.com", 1);
    let second = ShortLinkRecord::new("abc12", "https://second.com", 2);

    store.create_if_absent("abc12", &first).await.unwrap();
    let err = store.create_if_absent("abc12", &second).await.unwrap_err();

    assert!(matches!(err, CreateError::Conflict(_)));

    let url: String = sqlx::query_scalar("SELECT url FROM short_links WHERE id = 'abc12'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(url, "https://first.com");
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_custom_table_and_key_names(pool: PgPool) {
    let store = pg_store(pool.clone(), "test_table_name", "test_key_name").await;
    let record = ShortLinkRecord::new("zxcvb", "https://mydomain.com", 1);

    store.create_if_absent("zxcvb", &record).await.unwrap();
    let err = store.create_if_absent("zxcvb", &record).await.unwrap_err();

    assert!(matches!(err, CreateError::Conflict(_)));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_missing_table_is_store_error(pool: PgPool) {
    let store = PgRecordStore::new(Arc::new(pool), "missing_table", "id").unwrap();
    let record = ShortLinkRecord::new("abc12", "https://example.com", 1);

    let err = store.create_if_absent("abc12", &record).await.unwrap_err();

    assert!(matches!(err, CreateError::Store(_)));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn test_pg_existing_table_with_custom_key_constraint(pool: PgPool) {
    sqlx::query(
        r#"
        CREATE TABLE provisioned_links (
            id TEXT NOT NULL,
            url TEXT NOT NULL,
            clicks BIGINT NOT NULL DEFAULT 0,
            created_at BIGINT NOT NULL,
            CONSTRAINT provisioned_links_id_pk PRIMARY KEY (id)
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let store = Arc::new(pg_store(pool, "provisioned_links", "id").await);
    let allocator = common::create_allocator(store, "a", 3, 5);

    allocator.allocate("https://first.com").await.unwrap();
    let err = allocator.allocate("https://second.com").await.unwrap_err();

    assert!(matches!(
        err,
        AllocationError::RetriesExhausted { attempts: 5, .. }
    ));
}

#[tokio::test]
#[ignore = "requires REDIS_URL"]
async fn test_redis_set_nx_conflict() {
    let redis_url = std::env::var("REDIS_URL").unwrap();
    let prefix = format!("shortlink-test-{}:", std::process::id());
    let store = RedisRecordStore::connect(&redis_url, &prefix).await.unwrap();
    let record = ShortLinkRecord::new("abc12", "https://example.com", 1);

    store.create_if_absent("abc12", &record).await.unwrap();
    let err = store.create_if_absent("abc12", &record).await.unwrap_err();

    assert!(matches!(err, CreateError::Conflict(_)));
}
