//! Error types shared by the record store adapters and the allocator.
//!
//! The adapter boundary reports exactly two kinds of failure through
//! [`CreateError`]: a key collision ([`ConflictError`]) and everything else
//! ([`StoreError`]). Backend-specific error inspection never leaves the adapter
//! that produced it.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The candidate identifier is already taken in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("short identifier '{key}' is already taken: {detail}")]
pub struct ConflictError {
    pub key: String,
    pub detail: String,
}

impl ConflictError {
    pub fn new(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            detail: detail.into(),
        }
    }
}

/// Any store failure other than a key collision.
///
/// Covers connectivity, throttling, authorization, malformed input and internal
/// backend faults. The underlying cause is kept as the error source.
#[derive(Debug, Error)]
#[error("{backend} store error: {message}")]
pub struct StoreError {
    pub backend: &'static str,
    pub message: String,
    #[source]
    source: Option<BoxError>,
}

impl StoreError {
    pub fn new(backend: &'static str, message: impl Into<String>) -> Self {
        Self {
            backend,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        backend: &'static str,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self {
            backend,
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Outcome of a failed conditional create.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Terminal failure of an allocation call.
///
/// Distinguishes "could not find a free short identifier in time" from
/// "storage is unavailable".
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Every attempt within the budget collided. Carries the last conflict.
    #[error("no free short identifier after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: ConflictError },

    /// A non-conflict store failure, surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_store_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::with_source("postgres", "connection failed", io);

        assert_eq!(err.to_string(), "postgres store error: connection failed");
        assert_eq!(err.source().unwrap().to_string(), "refused");
    }

    #[test]
    fn test_store_error_passes_through_allocation_error() {
        let err = AllocationError::from(StoreError::new("memory", "internal error"));

        assert_eq!(err.to_string(), "memory store error: internal error");
        assert!(matches!(err, AllocationError::Store(_)));
    }

    #[test]
    fn test_retries_exhausted_mentions_last_conflict() {
        let err = AllocationError::RetriesExhausted {
            attempts: 5,
            last: ConflictError::new("8ikm7", "The conditional request failed"),
        };

        let message = err.to_string();
        assert!(message.contains("after 5 attempts"));
        assert!(message.contains("8ikm7"));
        assert!(message.contains("The conditional request failed"));
    }
}
