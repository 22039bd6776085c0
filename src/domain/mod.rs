//! Domain layer containing business entities and capability interfaces.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. It defines what the allocator needs from the outside world:
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Record store trait implemented by infrastructure
//! - [`id_generator`] - Candidate identifier generation
//! - [`clock`] - Timestamp source
//! - [`errors`] - Conflict, store and allocation errors
//!
//! # Allocation Flow
//!
//! 1. HTTP handler receives a URL
//! 2. [`crate::application::services::Allocator`] asks [`id_generator::IdGenerator`] for a candidate
//! 3. A [`entities::ShortLinkRecord`] is built with a [`clock::Clock`] timestamp
//! 4. [`repositories::RecordStore::create_if_absent`] persists it or reports a conflict
//! 5. Conflicts are retried with a new candidate until the budget runs out

pub mod clock;
pub mod entities;
pub mod errors;
pub mod id_generator;
pub mod repositories;
