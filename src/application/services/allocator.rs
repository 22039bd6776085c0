//! Short identifier allocation with collision retry.

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::ShortLinkRecord;
use crate::domain::errors::{AllocationError, ConflictError, CreateError, StoreError};
use crate::domain::id_generator::{AlphabetIdGenerator, IdGenerator, InvalidGeneratorConfig};
use crate::domain::repositories::RecordStore;

/// Allocation settings.
#[derive(Debug, Clone)]
pub struct AllocatorConfig {
    /// Total number of conditional writes allowed per allocation.
    pub max_retries: NonZeroU32,
    /// Length of generated identifiers.
    pub id_length: usize,
    /// Characters generated identifiers are drawn from.
    pub alphabet: String,
}

/// Outcome of a single attempt.
enum Attempt {
    Created(ShortLinkRecord),
    Collided(ConflictError),
    Failed(StoreError),
}

/// Assigns short identifiers to URLs and persists the mapping.
///
/// Each attempt draws a fresh candidate, stamps a new record with the clock and
/// issues one conditional create. Conflicts are retried with a new candidate
/// until the budget is spent; any other store failure ends the call at once.
///
/// The allocator holds no lock and no state between calls. Uniqueness across
/// concurrent callers is guaranteed by the store's conditional create.
pub struct Allocator {
    store: Arc<dyn RecordStore>,
    generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    max_retries: NonZeroU32,
}

impl Allocator {
    /// Creates an allocator from explicit capabilities.
    pub fn new(
        store: Arc<dyn RecordStore>,
        generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        max_retries: NonZeroU32,
    ) -> Self {
        Self {
            store,
            generator,
            clock,
            max_retries,
        }
    }

    /// Creates an allocator with an alphabet generator and the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeneratorConfig`] if the alphabet or length is unusable.
    pub fn from_config(
        store: Arc<dyn RecordStore>,
        config: &AllocatorConfig,
    ) -> Result<Self, InvalidGeneratorConfig> {
        let generator = AlphabetIdGenerator::new(&config.alphabet, config.id_length)?;

        Ok(Self::new(
            store,
            Arc::new(generator),
            Arc::new(SystemClock),
            config.max_retries,
        ))
    }

    pub fn max_retries(&self) -> NonZeroU32 {
        self.max_retries
    }

    /// Allocates an identifier for `url` using the configured budget.
    ///
    /// # Errors
    ///
    /// See [`Self::allocate_with_budget`].
    pub async fn allocate(&self, url: &str) -> Result<ShortLinkRecord, AllocationError> {
        self.allocate_with_budget(url, self.max_retries).await
    }

    /// Allocates an identifier for `url`, calling the store at most
    /// `max_retries` times.
    ///
    /// On success the returned record is the one now stored under its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::RetriesExhausted`] when every attempt collided,
    /// carrying the last conflict.
    ///
    /// Returns [`AllocationError::Store`] on the first non-conflict failure,
    /// without further attempts.
    pub async fn allocate_with_budget(
        &self,
        url: &str,
        max_retries: NonZeroU32,
    ) -> Result<ShortLinkRecord, AllocationError> {
        let mut remaining = max_retries.get();

        loop {
            match self.attempt(url).await {
                Attempt::Created(record) => return Ok(record),
                Attempt::Failed(err) => return Err(AllocationError::Store(err)),
                Attempt::Collided(conflict) => {
                    remaining -= 1;
                    if remaining == 0 {
                        return Err(AllocationError::RetriesExhausted {
                            attempts: max_retries.get(),
                            last: conflict,
                        });
                    }
                }
            }
        }
    }

    async fn attempt(&self, url: &str) -> Attempt {
        let candidate = self.generator.generate();
        let record = ShortLinkRecord::new(candidate, url, self.clock.now());

        match self.store.create_if_absent(&record.id, &record).await {
            Ok(()) => Attempt::Created(record),
            Err(CreateError::Conflict(conflict)) => Attempt::Collided(conflict),
            Err(CreateError::Store(err)) => Attempt::Failed(err),
        }
    }
}
