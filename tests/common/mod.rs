#![allow(dead_code)]

use async_trait::async_trait;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use shortlink::application::services::Allocator;
use shortlink::domain::clock::Clock;
use shortlink::domain::entities::ShortLinkRecord;
use shortlink::domain::errors::{ConflictError, CreateError, StoreError};
use shortlink::domain::id_generator::AlphabetIdGenerator;
use shortlink::domain::repositories::RecordStore;
use shortlink::infrastructure::persistence::InMemoryRecordStore;
use shortlink::state::AppState;

pub const TS: i64 = 1_234_567_890;

/// Clock frozen at [`TS`].
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        TS
    }
}

/// Store that answers every create with the same outcome and counts calls.
pub struct ScriptedStore {
    pub calls: AtomicUsize,
    outcome: fn(&str) -> Result<(), CreateError>,
}

impl ScriptedStore {
    pub fn always_conflict() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: |key| Err(ConflictError::new(key, "record already exists").into()),
        }
    }

    pub fn always_unavailable() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: |_| Err(StoreError::new("scripted", "backend unavailable").into()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for ScriptedStore {
    async fn create_if_absent(
        &self,
        key: &str,
        _record: &ShortLinkRecord,
    ) -> Result<(), CreateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)(key)
    }
}

pub fn budget(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

/// Allocator over `store` with a real generator and a fixed clock.
pub fn create_allocator(
    store: Arc<dyn RecordStore>,
    alphabet: &str,
    id_length: usize,
    max_retries: u32,
) -> Allocator {
    let generator = AlphabetIdGenerator::new(alphabet, id_length).unwrap();
    Allocator::new(
        store,
        Arc::new(generator),
        Arc::new(FixedClock),
        budget(max_retries),
    )
}

pub fn create_test_state(store: Arc<dyn RecordStore>) -> AppState {
    let allocator = create_allocator(store, shortlink::domain::id_generator::URL_ALPHABET, 5, 5);
    AppState::new(Arc::new(allocator))
}

pub fn create_memory_state() -> (AppState, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    (create_test_state(store.clone()), store)
}
