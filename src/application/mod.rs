//! Application layer services implementing business logic.
//!
//! Services consume the domain's capability traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::allocator::Allocator`] - Short identifier allocation with collision retry

pub mod services;
