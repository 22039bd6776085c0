//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Record store implementations (memory, PostgreSQL, Redis)

pub mod persistence;
